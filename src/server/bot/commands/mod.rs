//! Poise commands for members, moderators and server managers.
//!
//! - `star`/`unstar` - Star a message without reacting
//! - `stars` - Per-message and per-member moderation (Manage Messages)
//! - `starboard` - Guild configuration (Manage Guild)
//!
//! Every command resolves the invoking guild's coordinator through the registry.
//! Starboard rule violations are turned into a reply by `on_error`.

use std::sync::Arc;

use serenity::all::{ChannelId, MessageId};
use tracing::error;

use crate::server::{
    error::{starboard::StarboardError, AppError},
    service::starboard::GuildStarboard,
    state::AppState,
    util::parse::parse_message_reference,
};

pub mod star;
pub mod starboard;
pub mod stars;

pub type Context<'a> = poise::Context<'a, AppState, AppError>;

/// Every command registered with the framework.
pub fn all_commands() -> Vec<poise::Command<AppState, AppError>> {
    vec![
        star::star(),
        star::unstar(),
        stars::stars(),
        starboard::starboard(),
    ]
}

/// Replies with the text of starboard errors and logs everything else.
pub async fn on_error(error: poise::FrameworkError<'_, AppState, AppError>) {
    match error {
        poise::FrameworkError::Command {
            error: AppError::StarboardErr(e),
            ctx,
            ..
        } => {
            if let Err(e) = ctx.say(e.to_string()).await {
                error!("Failed to send command reply: {}", e);
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(
                "Command `{}` failed: {}",
                ctx.command().qualified_name,
                error
            );
            if let Err(e) = ctx.say("Something went wrong, please try again later.").await {
                error!("Failed to send command reply: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Failed to handle command error: {}", e);
            }
        }
    }
}

/// Coordinator of the guild the command was invoked in.
async fn guild_starboard(ctx: Context<'_>) -> Result<Arc<GuildStarboard>, AppError> {
    let guild_id = ctx.guild_id().ok_or(StarboardError::GuildOnly)?;

    ctx.data().registry.get(guild_id).await
}

/// Resolves a message link or bare id, defaulting to the invoking channel.
///
/// Links to messages outside the invoking guild are rejected.
fn resolve_message(ctx: Context<'_>, reference: &str) -> Result<(ChannelId, MessageId), AppError> {
    let guild_id = ctx.guild_id().ok_or(StarboardError::GuildOnly)?;
    let resolved = parse_message_reference(reference)?.resolve(guild_id, ctx.channel_id())?;

    Ok(resolved)
}
