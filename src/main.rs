mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{
    config::Config, error::AppError, service::roblox::RobloxClient, state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Service desk stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let identity_lookup = RobloxClient::new(http_client, config.roblox_api_url.clone());

    let state = AppState::new(
        db,
        Arc::new(identity_lookup),
        config.service_name.clone(),
        config.reverify_policy,
    );

    tracing::info!(
        "Starting service desk for '{}' (re-verification: {:?})",
        config.service_name,
        config.reverify_policy
    );

    bot::start::start_bot(&config, state).await
}
