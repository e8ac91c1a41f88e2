//! Discord bot integration for the starboard.
//!
//! This module wires the starboard into Discord: reaction events are handled by the
//! Serenity event handler in `handler`, moderator and member commands are served by
//! poise in `commands`. Both resolve the guild's coordinator through the shared
//! `StarboardRegistry`.
//!
//! Mirrors are posted through the starboard gateway, which holds its own HTTP handle
//! built from the same token, so the janitors keep working while shards reconnect.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Resolve channels and guilds from the cache
//! - `GUILD_MESSAGES` - Receive prefix commands
//! - `GUILD_MESSAGE_REACTIONS` - Receive star reactions
//! - `MESSAGE_CONTENT` - Read source messages and prefix commands (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod start;
