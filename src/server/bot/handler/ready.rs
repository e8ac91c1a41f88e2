//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.

use serenity::all::{ActivityData, Context, Ready};
use tracing::info;

/// Handles the ready event when the bot connects to Discord.
///
/// Guild coordinators are loaded lazily on their first reaction or command, so
/// nothing is preloaded here.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching("for ⭐")));
}
