use serenity::all::{ChannelId, GuildId, MessageId};

use crate::server::error::{internal::InternalError, starboard::StarboardError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Message named by a command argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageReference {
    /// Bare message id, located in the channel the command was invoked from.
    Id(MessageId),
    /// Message link. `guild_id` is `None` for direct message links (`@me`).
    Link {
        guild_id: Option<GuildId>,
        channel_id: ChannelId,
        message_id: MessageId,
    },
}

impl MessageReference {
    /// Resolves the reference for a command invoked in `guild_id` and `channel_id`.
    ///
    /// # Returns
    /// - `Ok((ChannelId, MessageId))` - Channel and id of the message
    /// - `Err(StarboardError::ForeignMessage)` - Link points outside the invoking guild
    pub fn resolve(
        self,
        guild_id: GuildId,
        channel_id: ChannelId,
    ) -> Result<(ChannelId, MessageId), StarboardError> {
        match self {
            MessageReference::Id(message_id) => Ok((channel_id, message_id)),
            MessageReference::Link {
                guild_id: Some(link_guild),
                channel_id,
                message_id,
            } if link_guild == guild_id => Ok((channel_id, message_id)),
            MessageReference::Link { .. } => Err(StarboardError::ForeignMessage),
        }
    }
}

/// Parses a message reference given to a command.
///
/// Accepts either a message link (`https://discord.com/channels/<guild>/<channel>/<message>`,
/// including the `ptb.` and `canary.` hosts) or a bare message id.
///
/// # Arguments
/// - `value` - Raw command argument
///
/// # Returns
/// - `Ok(MessageReference::Link)` - Message link
/// - `Ok(MessageReference::Id)` - Bare message id
/// - `Err(StarboardError::InvalidMessageReference)` - Neither form matched
pub fn parse_message_reference(value: &str) -> Result<MessageReference, StarboardError> {
    let invalid = || StarboardError::InvalidMessageReference(value.to_string());
    let trimmed = value.trim().trim_start_matches('<').trim_end_matches('>');

    if let Ok(id) = trimmed.parse::<u64>() {
        return match id {
            0 => Err(invalid()),
            id => Ok(MessageReference::Id(MessageId::new(id))),
        };
    }

    let path = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(invalid)?;

    let mut segments = path.split('/');
    let host = segments.next().ok_or_else(invalid)?;
    if !matches!(
        host,
        "discord.com" | "ptb.discord.com" | "canary.discord.com" | "discordapp.com"
    ) || segments.next() != Some("channels")
    {
        return Err(invalid());
    }

    let guild_id = match segments.next().ok_or_else(invalid)? {
        "@me" => None,
        guild => Some(GuildId::new(parse_snowflake(Some(guild)).ok_or_else(invalid)?)),
    };
    let channel_id = parse_snowflake(segments.next()).ok_or_else(invalid)?;
    let message_id = parse_snowflake(segments.next()).ok_or_else(invalid)?;

    if segments.next().is_some_and(|rest| !rest.is_empty()) {
        return Err(invalid());
    }

    Ok(MessageReference::Link {
        guild_id,
        channel_id: ChannelId::new(channel_id),
        message_id: MessageId::new(message_id),
    })
}

fn parse_snowflake(segment: Option<&str>) -> Option<u64> {
    segment
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|id| *id != 0)
}
