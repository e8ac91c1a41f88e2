use serenity::all::{Client, GatewayIntents};
use tracing::{error, info};

use crate::server::{
    bot::{commands, handler::Handler},
    config::Config,
    error::AppError,
    state::AppState,
};

/// Initializes the Discord bot client without starting it.
///
/// Creates the Serenity client with the starboard event handler and the poise command
/// framework.
///
/// # Arguments
/// - `config` - Application configuration
/// - `state` - Application state handed to handlers and commands
///
/// # Returns
/// - `Ok(Client)` - Bot client ready to start
/// - `Err(AppError)` - Bot initialization failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let framework_state = state.clone();
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(commands::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Registered {} commands", framework.options().commands.len());
                Ok(framework_state)
            })
        })
        .build();

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .framework(framework)
        .await?;

    Ok(client)
}

/// Runs the Discord bot until it is shut down.
///
/// Ctrl-C closes every shard so this function returns and the caller can drain the
/// starboard queues.
///
/// # Arguments
/// - `client` - Discord client created by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the connection to Discord failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        info!("Shutdown signal received, disconnecting from Discord");
        shard_manager.shutdown_all().await;
    });

    info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
