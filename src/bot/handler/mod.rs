use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod command;
pub mod component;
pub mod modal;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for slash commands, menu selections and form submissions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => {
                command::handle_command(&self.state, ctx, command).await;
            }
            Interaction::Component(component) => {
                component::handle_component(&self.state, ctx, component).await;
            }
            Interaction::Modal(modal) => {
                modal::handle_modal(&self.state, ctx, modal).await;
            }
            _ => {}
        }
    }
}
