//! Reaction event handlers.
//!
//! Reactions carrying the guild's star emoji are translated into coordinator calls.
//! Rule violations are routine here (bots reacting, members starring their own
//! message) so they are only logged at debug level.

use std::sync::Arc;

use serenity::all::{ChannelId, Context, GuildId, MessageId, Reaction, UserId};
use tracing::{debug, error, warn};

use crate::server::{
    error::AppError, model::starboard_message::StarboardMessage,
    service::starboard::GuildStarboard, state::AppState,
};

/// Handles a star being added to a message.
pub async fn handle_reaction_add(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some(starboard) = star_reaction(state, &reaction).await else {
        return;
    };
    let Some((user_id, bot)) = reactor(&ctx, &reaction).await else {
        return;
    };

    let result = starboard
        .add_star(reaction.message_id, Some(reaction.channel_id), user_id, bot)
        .await;
    log_result("star", reaction.message_id, result);
}

/// Handles a star being withdrawn from a message.
pub async fn handle_reaction_remove(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some(starboard) = star_reaction(state, &reaction).await else {
        return;
    };
    let Some((user_id, bot)) = reactor(&ctx, &reaction).await else {
        return;
    };

    let result = starboard
        .remove_star(reaction.message_id, Some(reaction.channel_id), user_id, bot)
        .await;
    log_result("unstar", reaction.message_id, result);
}

/// Handles a moderator removing every reaction from a message.
///
/// The event carries no guild, so the channel is resolved through the cache or HTTP.
pub async fn handle_reaction_remove_all(
    state: &AppState,
    ctx: Context,
    channel_id: ChannelId,
    message_id: MessageId,
) {
    let guild_id = match channel_id.to_channel(&ctx).await {
        Ok(channel) => channel.guild().map(|channel| channel.guild_id),
        Err(e) => {
            warn!("Failed to resolve channel {}: {}", channel_id, e);
            return;
        }
    };
    let Some(starboard) = load(state, guild_id).await else {
        return;
    };

    clear(&starboard, message_id).await;
}

/// Handles a moderator removing every reaction of one emoji from a message.
pub async fn handle_reaction_remove_emoji(state: &AppState, _ctx: Context, reaction: Reaction) {
    let Some(starboard) = star_reaction(state, &reaction).await else {
        return;
    };

    clear(&starboard, reaction.message_id).await;
}

/// Resolves the coordinator for a reaction carrying the guild's star emoji.
async fn star_reaction(state: &AppState, reaction: &Reaction) -> Option<Arc<GuildStarboard>> {
    let starboard = load(state, reaction.guild_id).await?;
    let emoji = starboard.settings().await.emoji;

    (reaction.emoji.to_string() == emoji).then_some(starboard)
}

async fn load(state: &AppState, guild_id: Option<GuildId>) -> Option<Arc<GuildStarboard>> {
    let guild_id = guild_id?;

    match state.registry.get(guild_id).await {
        Ok(starboard) => Some(starboard),
        Err(e) => {
            error!("Failed to load starboard for guild {}: {}", guild_id, e);
            None
        }
    }
}

/// Identifies the reacting user and whether it is a bot account.
///
/// Add events carry the member, remove events only the user id.
async fn reactor(ctx: &Context, reaction: &Reaction) -> Option<(UserId, bool)> {
    if let Some(member) = &reaction.member {
        return Some((member.user.id, member.user.bot));
    }

    match reaction.user(ctx).await {
        Ok(user) => Some((user.id, user.bot)),
        Err(e) => {
            warn!(
                "Failed to resolve user reacting to message {}: {}",
                reaction.message_id, e
            );
            None
        }
    }
}

async fn clear(starboard: &GuildStarboard, message_id: MessageId) {
    match starboard.clear_stars(message_id).await {
        Ok(true) => debug!("Cleared stars of message {}", message_id),
        Ok(false) => {}
        Err(e) => error!("Failed to clear stars of message {}: {}", message_id, e),
    }
}

fn log_result(action: &str, message_id: MessageId, result: Result<StarboardMessage, AppError>) {
    match result {
        Ok(record) => debug!(
            "Applied {} to message {}, now at {} stars",
            action,
            message_id,
            record.stars()
        ),
        Err(AppError::StarboardErr(e)) => {
            debug!("Rejected {} on message {}: {}", action, message_id, e)
        }
        Err(e) => error!("Failed to {} message {}: {}", action, message_id, e),
    }
}
