use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Starts the Discord bot and runs it until the gateway connection ends.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(())` - Bot shut down cleanly
/// - `Err(AppError)` - Client construction or gateway connection failed
pub async fn start_bot(config: &Config, state: AppState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
