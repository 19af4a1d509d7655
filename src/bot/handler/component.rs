//! Select menu handling for the service panel.

use serenity::all::{ComponentInteraction, ComponentInteractionDataKind, Context};

use crate::{
    bot::render, model::interaction::SERVICE_MENU_ID, service::menu::MenuService,
    state::AppState,
};

/// Handles a component interaction.
///
/// Anything that is not a selection on the service menu is routed as an empty
/// value, which the menu answers with its unknown-option notice.
pub async fn handle_component(state: &AppState, ctx: Context, component: ComponentInteraction) {
    let value = selected_value(&component.data.custom_id, &component.data.kind);
    if value.is_none() {
        tracing::debug!(
            "Unexpected component payload from '{}'",
            component.data.custom_id
        );
    }

    let reply = MenuService::new(&state.db)
        .select(component.user.id.get(), value.unwrap_or_default())
        .await
        .unwrap_or_else(|e| e.into_reply());

    if let Err(e) = component
        .create_response(&ctx.http, render::response(reply))
        .await
    {
        tracing::error!("Failed to respond to service menu selection: {:?}", e);
    }
}

/// First value picked on the service menu, if the payload is one.
fn selected_value<'a>(custom_id: &str, kind: &'a ComponentInteractionDataKind) -> Option<&'a str> {
    if custom_id != SERVICE_MENU_ID {
        return None;
    }

    match kind {
        ComponentInteractionDataKind::StringSelect { values } => {
            values.first().map(String::as_str)
        }
        _ => None,
    }
}
