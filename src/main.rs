mod server;

use std::sync::Arc;

use serenity::all::Http;
use tracing::{error, info};

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    service::starboard::{gateway::SerenityGateway, StarboardRegistry},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let http = Arc::new(Http::new(&config.discord_bot_token));
    let gateway = Arc::new(SerenityGateway::new(http));
    let registry = Arc::new(StarboardRegistry::new(db.clone(), gateway, config.starboard));
    let state = AppState::new(db, registry.clone());

    info!("Starting starboard");

    let client = bot::start::init_bot(&config, state).await?;
    if let Err(e) = bot::start::start_bot(client).await {
        error!("Discord bot error: {}", e);
    }

    // every janitor drains its queue before the process exits
    registry.shutdown().await;
    info!("Starboard stopped");

    Ok(())
}
