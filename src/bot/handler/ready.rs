//! Ready event handler for bot initialization.
//!
//! Fired once the bot completes the gateway handshake. Registers the global
//! `/setup` command so it is available in every guild the bot is in.

use serenity::all::{Command, Context, Ready};

use crate::bot::handler::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, vec![command::register_setup()]).await {
        Ok(commands) => tracing::info!("Registered {} global command(s)", commands.len()),
        Err(e) => tracing::error!("Failed to register global commands: {:?}", e),
    }
}
