//! Form submission handling.

use serenity::all::{
    ActionRowComponent, Context, CreateInteractionResponse, ModalInteraction, ModalInteractionData,
};

use crate::{
    bot::render,
    model::{
        interaction::{Actor, ServiceAction},
        reply::Reply,
    },
    service::{ledger::LedgerService, verification::VerificationService},
    state::AppState,
};

/// Handles a submitted form.
pub async fn handle_modal(state: &AppState, ctx: Context, modal: ModalInteraction) {
    let Some(action) = ServiceAction::from_form_id(&modal.data.custom_id) else {
        tracing::debug!("Ignoring form '{}'", modal.data.custom_id);
        return;
    };

    let input = input_value(&modal.data, action.input_id()).unwrap_or_default();
    let discord_id = modal.user.id.get();

    match action {
        ServiceAction::Verify => verify(state, &ctx, &modal, &input).await,
        ServiceAction::Deposit => {
            let result = LedgerService::new(&state.db)
                .deposit(discord_id, &input)
                .await;
            respond(&ctx, &modal, action, result.unwrap_or_else(|e| e.into_reply())).await;
        }
        ServiceAction::Withdraw => {
            let result = LedgerService::new(&state.db)
                .withdraw(discord_id, &input)
                .await;
            respond(&ctx, &modal, action, result.unwrap_or_else(|e| e.into_reply())).await;
        }
    }
}

async fn respond(ctx: &Context, modal: &ModalInteraction, action: ServiceAction, reply: Reply) {
    if let Err(e) = modal
        .create_response(&ctx.http, render::response(reply))
        .await
    {
        tracing::error!("Failed to respond to {} form: {:?}", action.menu_value(), e);
    }
}

/// Verification waits on Roblox, so the interaction is acknowledged first and the
/// result is sent as a followup.
async fn verify(state: &AppState, ctx: &Context, modal: &ModalInteraction, username: &str) {
    if let Err(e) = modal
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await
    {
        tracing::error!("Failed to acknowledge verification form: {:?}", e);
        return;
    }

    let actor = Actor {
        discord_id: modal.user.id.get(),
        name: modal
            .member
            .as_ref()
            .map(|member| member.display_name().to_string())
            .unwrap_or_else(|| modal.user.display_name().to_string()),
    };

    let reply = VerificationService::new(
        &state.db,
        state.identity_lookup.as_ref(),
        state.reverify_policy,
    )
    .verify(actor, username)
    .await
    .unwrap_or_else(|e| e.into_reply());

    let Some(notice) = reply.notice() else {
        return;
    };
    if let Err(e) = modal
        .create_followup(&ctx.http, render::followup(notice))
        .await
    {
        tracing::error!("Failed to send verification result: {:?}", e);
    }
}

/// Text entered into the input with the given custom id.
fn input_value(data: &ModalInteractionData, custom_id: &str) -> Option<String> {
    data.components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.clone()
            }
            _ => None,
        })
}
