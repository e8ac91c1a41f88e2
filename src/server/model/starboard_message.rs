//! Star bookkeeping for a single source message.

use std::{collections::HashSet, time::Instant};

use serenity::all::{ChannelId, Message, MessageId, UserId};

use crate::server::{
    error::{starboard::StarboardError, AppError},
    model::{
        settings::{GuildSettings, IgnoreTarget},
        source::SourceMessage,
    },
    util::parse::parse_u64_from_string,
};

/// Location of a mirror post in a starboard channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorRef {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

/// State of one tracked source message.
///
/// Rule checks live here so every entry point (reactions, commands) applies them the
/// same way. Callers are responsible for persisting and enqueueing after a successful
/// mutation.
#[derive(Debug, Clone)]
pub struct StarboardMessage {
    pub message_id: MessageId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub author_bot: bool,
    pub starrers: HashSet<UserId>,
    /// Set by moderators to keep the message off the starboard regardless of stars.
    pub hidden: bool,
    pub mirror: Option<MirrorRef>,
    /// Rendering snapshot, `None` for records loaded from the database until fetched.
    pub source: Option<SourceMessage>,
    /// Whether the message is waiting in the guild's update queue.
    pub in_queue: bool,
    /// Mirror changed on Discord but isn't persisted yet.
    pub mirror_dirty: bool,
    /// Last time the record was touched, drives cache eviction.
    pub last_update: Instant,
}

impl StarboardMessage {
    /// Creates a fresh record for a message fetched from Discord.
    pub fn from_message(message: &Message) -> Self {
        Self {
            message_id: message.id,
            channel_id: message.channel_id,
            author_id: message.author.id,
            author_bot: message.author.bot,
            starrers: HashSet::new(),
            hidden: false,
            mirror: None,
            source: Some(SourceMessage::from_message(message)),
            in_queue: false,
            mirror_dirty: false,
            last_update: Instant::now(),
        }
    }

    /// Converts a persisted message row and its starrer rows into a record.
    ///
    /// The record has no source snapshot, it is fetched when the message next becomes
    /// eligible for the starboard. A half-written mirror (only one of the two ids set)
    /// is treated as no mirror.
    ///
    /// # Arguments
    /// - `entity` - Message row
    /// - `starrers` - Starrer rows belonging to the message
    ///
    /// # Returns
    /// - `Ok(StarboardMessage)` - Converted record
    /// - `Err(AppError::InternalErr)` - A stored id failed to parse
    pub fn from_entity(
        entity: entity::starboard_message::Model,
        starrers: Vec<entity::starboard_starrer::Model>,
    ) -> Result<Self, AppError> {
        let mirror = match (entity.mirror_channel_id, entity.mirror_message_id) {
            (Some(channel_id), Some(message_id)) => Some(MirrorRef {
                channel_id: ChannelId::new(parse_u64_from_string(channel_id)?),
                message_id: MessageId::new(parse_u64_from_string(message_id)?),
            }),
            _ => None,
        };

        let starrers = starrers
            .into_iter()
            .map(|starrer| parse_u64_from_string(starrer.user_id).map(UserId::new))
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self {
            message_id: MessageId::new(parse_u64_from_string(entity.message_id)?),
            channel_id: ChannelId::new(parse_u64_from_string(entity.channel_id)?),
            author_id: UserId::new(parse_u64_from_string(entity.author_id)?),
            author_bot: entity.author_bot,
            starrers,
            hidden: entity.hidden,
            mirror,
            source: None,
            in_queue: false,
            mirror_dirty: false,
            last_update: Instant::now(),
        })
    }

    /// Number of users who starred the message.
    pub fn stars(&self) -> usize {
        self.starrers.len()
    }

    /// Whether the source snapshot has something to show, `false` without a snapshot.
    pub fn is_displayable(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(SourceMessage::is_displayable)
    }

    /// Whether the star count and hidden flag allow a mirror, before looking at the source.
    pub fn is_eligible(&self, min_stars: u32) -> bool {
        !self.hidden && self.stars() >= min_stars as usize
    }

    /// Adds a star from `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Member starring the message
    /// - `user_bot` - Whether the member is a bot account
    /// - `settings` - Guild settings providing the ignore lists and self-star rule
    ///
    /// # Returns
    /// - `Ok(())` - Star recorded
    /// - `Err(StarboardError::AlreadyStarred)` - User already starred the message
    /// - `Err(StarboardError::IgnoredChannel)` - Source channel is ignored
    /// - `Err(StarboardError::BlockedAuthor)` - Author is ignored or a bot
    /// - `Err(StarboardError::BlockedUser)` - User is ignored, a bot, or starring their
    ///   own message while self-starring is disabled
    pub fn add_star(
        &mut self,
        user_id: UserId,
        user_bot: bool,
        settings: &GuildSettings,
    ) -> Result<(), StarboardError> {
        if self.starrers.contains(&user_id) {
            return Err(StarboardError::AlreadyStarred);
        }
        self.check_participants(user_id, user_bot, settings)?;
        if user_id == self.author_id && !settings.allow_selfstar {
            return Err(StarboardError::BlockedUser);
        }

        self.starrers.insert(user_id);
        self.touch();
        Ok(())
    }

    /// Removes the star `user_id` gave.
    ///
    /// Runs the same ignore checks as [`add_star`](Self::add_star) except the self-star
    /// rule, so a member can always withdraw a star they were allowed to give.
    ///
    /// # Returns
    /// - `Ok(())` - Star removed
    /// - `Err(StarboardError::NotStarred)` - User hasn't starred the message
    /// - `Err(StarboardError)` - Ignore check failed, see `add_star`
    pub fn remove_star(
        &mut self,
        user_id: UserId,
        user_bot: bool,
        settings: &GuildSettings,
    ) -> Result<(), StarboardError> {
        if !self.starrers.contains(&user_id) {
            return Err(StarboardError::NotStarred);
        }
        self.check_participants(user_id, user_bot, settings)?;

        self.starrers.remove(&user_id);
        self.touch();
        Ok(())
    }

    /// Drops every star, used when Discord reports all reactions were removed.
    ///
    /// # Returns
    /// - `true` if at least one star was removed
    pub fn clear_stars(&mut self) -> bool {
        if self.starrers.is_empty() {
            return false;
        }
        self.starrers.clear();
        self.touch();
        true
    }

    pub fn hide(&mut self) -> Result<(), StarboardError> {
        if self.hidden {
            return Err(StarboardError::AlreadyHidden);
        }
        self.hidden = true;
        self.touch();
        Ok(())
    }

    pub fn unhide(&mut self) -> Result<(), StarboardError> {
        if !self.hidden {
            return Err(StarboardError::NotHidden);
        }
        self.hidden = false;
        self.touch();
        Ok(())
    }

    pub fn touch(&mut self) {
        self.last_update = Instant::now();
    }

    fn check_participants(
        &self,
        user_id: UserId,
        user_bot: bool,
        settings: &GuildSettings,
    ) -> Result<(), StarboardError> {
        if settings.is_ignored(IgnoreTarget::Channel(self.channel_id)) {
            return Err(StarboardError::IgnoredChannel);
        }
        if settings.is_ignored(IgnoreTarget::Member {
            id: self.author_id,
            bot: self.author_bot,
        }) {
            return Err(StarboardError::BlockedAuthor);
        }
        if settings.is_ignored(IgnoreTarget::Member {
            id: user_id,
            bot: user_bot,
        }) {
            return Err(StarboardError::BlockedUser);
        }
        Ok(())
    }
}
