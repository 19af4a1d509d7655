//! Slash command handling.

use chrono::{Datelike, Utc};
use serenity::all::{CommandInteraction, Context, CreateCommand, Permissions};

use crate::{
    bot::render,
    model::reply::{Notice, Reply},
    service::panel::setup_panel,
    state::AppState,
};

/// Name of the command posting the service panel.
pub const SETUP_COMMAND: &str = "setup";

/// Definition of `/setup`, hidden from non-administrators by default.
pub fn register_setup() -> CreateCommand {
    CreateCommand::new(SETUP_COMMAND)
        .description("Post the service desk panel in this channel")
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

/// Handles an invoked slash command.
///
/// The administrator permission is checked again from the member's resolved
/// permissions, since guilds can override the default command permissions.
pub async fn handle_command(state: &AppState, ctx: Context, command: CommandInteraction) {
    let reply = match command.data.name.as_str() {
        SETUP_COMMAND => {
            let is_admin =
                is_administrator(command.member.as_ref().and_then(|member| member.permissions));

            if is_admin {
                tracing::info!(
                    "{} posted the service panel in channel {}",
                    command.user.name,
                    command.channel_id
                );
            }

            setup_panel(is_admin, &state.service_name, Utc::now().year())
        }
        name => {
            tracing::warn!("Received unknown command /{}", name);
            Reply::Notice(Notice::error(
                "❌ Unknown command",
                "This command is not supported.",
            ))
        }
    };

    if let Err(e) = command
        .create_response(&ctx.http, render::response(reply))
        .await
    {
        tracing::error!("Failed to respond to /{}: {:?}", command.data.name, e);
    }
}

/// Whether resolved member permissions include administrator.
///
/// Invocations outside a guild carry no member and never qualify.
fn is_administrator(permissions: Option<Permissions>) -> bool {
    permissions.is_some_and(|permissions| permissions.administrator())
}
