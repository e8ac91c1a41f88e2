//! Per-guild starboard settings and ignore targets.

use std::collections::HashSet;

use serenity::all::{ChannelId, GuildId, UserId};

use crate::server::{
    error::AppError,
    util::parse::parse_u64_from_string,
};

/// Reaction that counts as a star when a guild hasn't picked one.
pub const DEFAULT_EMOJI: &str = "⭐";
/// Stars needed before a mirror is posted when a guild hasn't picked a threshold.
pub const DEFAULT_MIN_STARS: u32 = 1;

/// Starboard configuration for one guild.
///
/// A guild without a configured channel keeps tracking stars but never posts mirrors.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    pub guild_id: GuildId,
    /// Channel mirrors are posted to, `None` disables posting.
    pub channel_id: Option<ChannelId>,
    /// Stars needed for a message to be mirrored, always at least 1.
    pub min_stars: u32,
    /// Whether authors may star their own messages.
    pub allow_selfstar: bool,
    /// Reaction emoji that counts as a star, compared against the reaction's display form.
    pub emoji: String,
    /// Members blocked from starring and from being starred.
    pub ignored_members: HashSet<UserId>,
    /// Channels whose messages can't be starred.
    pub ignored_channels: HashSet<ChannelId>,
}

impl GuildSettings {
    /// Creates default settings for a guild that has never been configured.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the settings belong to
    ///
    /// # Returns
    /// - `GuildSettings` - No channel, threshold of 1, self-starring disabled, `⭐` emoji
    pub fn new(guild_id: GuildId) -> Self {
        Self {
            guild_id,
            channel_id: None,
            min_stars: DEFAULT_MIN_STARS,
            allow_selfstar: false,
            emoji: DEFAULT_EMOJI.to_string(),
            ignored_members: HashSet::new(),
            ignored_channels: HashSet::new(),
        }
    }

    /// Converts the persisted settings row and its ignore rows into settings.
    ///
    /// Ignore rows with an unknown kind are skipped. A stored threshold below 1 is
    /// clamped to 1.
    ///
    /// # Arguments
    /// - `entity` - Settings row for the guild
    /// - `ignores` - Every ignore row for the guild
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Converted settings
    /// - `Err(AppError::InternalErr)` - A stored id failed to parse
    pub fn from_entity(
        entity: entity::starboard_guild::Model,
        ignores: Vec<entity::starboard_ignore::Model>,
    ) -> Result<Self, AppError> {
        let guild_id = GuildId::new(parse_u64_from_string(entity.guild_id)?);
        let channel_id = entity
            .channel_id
            .map(parse_u64_from_string)
            .transpose()?
            .map(ChannelId::new);

        let mut settings = Self {
            guild_id,
            channel_id,
            min_stars: entity.min_stars.max(1) as u32,
            allow_selfstar: entity.allow_selfstar,
            emoji: entity.emoji,
            ignored_members: HashSet::new(),
            ignored_channels: HashSet::new(),
        };

        for ignore in ignores {
            let Some(kind) = IgnoreKind::parse(&ignore.kind) else {
                continue;
            };
            let target_id = parse_u64_from_string(ignore.target_id)?;
            match kind {
                IgnoreKind::Member => {
                    settings.ignored_members.insert(UserId::new(target_id));
                }
                IgnoreKind::Channel => {
                    settings.ignored_channels.insert(ChannelId::new(target_id));
                }
            }
        }

        Ok(settings)
    }

    /// Checks whether a member or channel is excluded from the starboard.
    ///
    /// Bots are always ignored. The starboard channel itself is always ignored so
    /// mirrors can't be starred.
    pub fn is_ignored(&self, target: IgnoreTarget) -> bool {
        match target {
            IgnoreTarget::Member { id, bot } => bot || self.ignored_members.contains(&id),
            IgnoreTarget::Channel(id) => {
                self.channel_id == Some(id) || self.ignored_channels.contains(&id)
            }
        }
    }

    /// Checks whether a target is explicitly listed, ignoring the implicit rules.
    pub fn is_listed(&self, target: IgnoreTarget) -> bool {
        match target {
            IgnoreTarget::Member { id, .. } => self.ignored_members.contains(&id),
            IgnoreTarget::Channel(id) => self.ignored_channels.contains(&id),
        }
    }
}

/// Something an ignore check can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreTarget {
    /// A guild member, `bot` marks bot accounts which are implicitly ignored.
    Member { id: UserId, bot: bool },
    Channel(ChannelId),
}

impl IgnoreTarget {
    /// A member target for an explicit list operation where the bot flag doesn't matter.
    pub fn member(id: UserId) -> Self {
        IgnoreTarget::Member { id, bot: false }
    }

    pub fn kind(&self) -> IgnoreKind {
        match self {
            IgnoreTarget::Member { .. } => IgnoreKind::Member,
            IgnoreTarget::Channel(_) => IgnoreKind::Channel,
        }
    }

    /// Raw Discord id of the target.
    pub fn target_id(&self) -> u64 {
        match self {
            IgnoreTarget::Member { id, .. } => id.get(),
            IgnoreTarget::Channel(id) => id.get(),
        }
    }
}

/// Persisted discriminator of an ignore row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreKind {
    Member,
    Channel,
}

impl IgnoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreKind::Member => "member",
            IgnoreKind::Channel => "channel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "member" => Some(IgnoreKind::Member),
            "channel" => Some(IgnoreKind::Channel),
            _ => None,
        }
    }
}
