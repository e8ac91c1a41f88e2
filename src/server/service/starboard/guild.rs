//! Per-guild starboard coordinator.
//!
//! `GuildStarboard` owns everything the starboard keeps for one guild: the settings,
//! a cache of tracked messages and the FIFO queue of messages waiting for their mirror
//! to be synchronized. All of it sits behind one async mutex so mutations and their
//! database writes are totally ordered per guild. Discord requests made while flushing
//! the queue happen outside that mutex.

use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
    time::Duration,
};

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, GuildId, MessageId, UserId};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::server::{
    config::StarboardTuning,
    data::{
        guild_settings::GuildSettingsRepository, ignore::IgnoreRepository,
        starboard_message::StarboardMessageRepository,
    },
    error::{gateway::GatewayError, starboard::StarboardError, AppError},
    model::{
        settings::{GuildSettings, IgnoreTarget},
        starboard_message::StarboardMessage,
    },
    scheduler::janitor::{Janitor, JanitorStatus},
    service::starboard::{gateway::StarboardGateway, sync::MirrorSynchronizer},
};

struct GuildState {
    settings: GuildSettings,
    cache: HashMap<MessageId, StarboardMessage>,
    queue: VecDeque<MessageId>,
}

/// Starboard coordinator for a single guild.
pub struct GuildStarboard {
    guild_id: GuildId,
    db: DatabaseConnection,
    gateway: Arc<dyn StarboardGateway>,
    tuning: StarboardTuning,
    state: Mutex<GuildState>,
    /// Serializes queue flushes so a message is never synchronized twice at once.
    flush_lock: Mutex<()>,
    janitor: Mutex<Option<Janitor>>,
}

impl GuildStarboard {
    /// Loads the coordinator of a guild, creating default settings on first access.
    ///
    /// The janitor is not started, see [`ensure_janitor`](Self::ensure_janitor).
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `gateway` - Discord operations
    /// - `tuning` - Janitor timings
    /// - `guild_id` - Guild to load
    ///
    /// # Returns
    /// - `Ok(Arc<GuildStarboard>)` - Coordinator with an empty cache and queue
    /// - `Err(AppError)` - Failed to load or create the guild's settings
    pub async fn load(
        db: DatabaseConnection,
        gateway: Arc<dyn StarboardGateway>,
        tuning: StarboardTuning,
        guild_id: GuildId,
    ) -> Result<Arc<Self>, AppError> {
        let settings = GuildSettingsRepository::new(&db)
            .get_or_create(guild_id)
            .await?;

        Ok(Arc::new(Self {
            guild_id,
            db,
            gateway,
            tuning,
            state: Mutex::new(GuildState {
                settings,
                cache: HashMap::new(),
                queue: VecDeque::new(),
            }),
            flush_lock: Mutex::new(()),
            janitor: Mutex::new(None),
        }))
    }

    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Current settings of the guild.
    pub async fn settings(&self) -> GuildSettings {
        self.state.lock().await.settings.clone()
    }

    /// Checks whether a member or channel is excluded from the starboard.
    pub async fn is_ignored(&self, target: IgnoreTarget) -> bool {
        self.state.lock().await.settings.is_ignored(target)
    }

    /// Number of messages waiting for synchronization.
    pub async fn queue_len(&self) -> usize {
        self.state.lock().await.queue.len()
    }

    /// Number of messages held in the cache.
    pub async fn cache_len(&self) -> usize {
        self.state.lock().await.cache.len()
    }

    /// Resolves the state of a message.
    ///
    /// Looks in the cache first, then in the database. When neither knows the message
    /// and `auto_create` is set, the message is fetched from `channel_hint` and a fresh
    /// record is cached. Failed fetches are not cached. Messages belonging to another
    /// guild are never loaded or created.
    ///
    /// # Arguments
    /// - `message_id` - Source message
    /// - `channel_hint` - Channel to fetch the message from if it isn't tracked yet
    /// - `auto_create` - Whether to start tracking an unknown message
    ///
    /// # Returns
    /// - `Ok(Some(StarboardMessage))` - Snapshot of the message state
    /// - `Ok(None)` - Message isn't tracked here and couldn't or shouldn't be created
    /// - `Err(AppError)` - Database failure or unexpected Discord error
    pub async fn get_or_load(
        &self,
        message_id: MessageId,
        channel_hint: Option<ChannelId>,
        auto_create: bool,
    ) -> Result<Option<StarboardMessage>, AppError> {
        {
            let mut state = self.state.lock().await;
            if let Some(record) = state.cache.get_mut(&message_id) {
                record.touch();
                return Ok(Some(record.clone()));
            }

            let repo = StarboardMessageRepository::new(&self.db);
            if let Some(record) = repo.find(self.guild_id, message_id).await? {
                state.cache.insert(message_id, record.clone());
                return Ok(Some(record));
            }

            if !auto_create {
                return Ok(None);
            }
            if let Some(owner) = repo.find_owner(message_id).await? {
                debug!(
                    "Message {} is tracked by guild {}, not {}",
                    message_id, owner, self.guild_id
                );
                return Ok(None);
            }
        }

        let Some(channel_id) = channel_hint else {
            return Ok(None);
        };

        let message = match self.gateway.fetch_message(channel_id, message_id).await {
            Ok(message) => message,
            Err(GatewayError::NotFound) | Err(GatewayError::Forbidden) => {
                debug!(
                    "Message {} in channel {} is not accessible",
                    message_id, channel_id
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        if message.guild_id.is_some_and(|guild_id| guild_id != self.guild_id) {
            debug!(
                "Message {} belongs to another guild than {}",
                message_id, self.guild_id
            );
            return Ok(None);
        }

        let mut state = self.state.lock().await;
        let record = state
            .cache
            .entry(message_id)
            .or_insert_with(|| StarboardMessage::from_message(&message));

        Ok(Some(record.clone()))
    }

    /// Queues a cached message for synchronization.
    ///
    /// # Returns
    /// - `true` if the message was added, `false` if it was already queued or isn't cached
    pub async fn enqueue(&self, message_id: MessageId) -> bool {
        let mut state = self.state.lock().await;
        enqueue_locked(&mut state, message_id)
    }

    /// Stars a message on behalf of `user_id`.
    ///
    /// # Arguments
    /// - `message_id` - Source message
    /// - `channel_hint` - Channel of the source message, used if it isn't tracked yet
    /// - `user_id` - Member adding the star
    /// - `user_bot` - Whether the member is a bot account
    ///
    /// # Returns
    /// - `Ok(StarboardMessage)` - Updated state, persisted and queued
    /// - `Err(AppError::StarboardErr)` - Rule violation, see `StarboardMessage::add_star`
    /// - `Err(AppError)` - Database or Discord failure
    pub async fn add_star(
        &self,
        message_id: MessageId,
        channel_hint: Option<ChannelId>,
        user_id: UserId,
        user_bot: bool,
    ) -> Result<StarboardMessage, AppError> {
        self.mutate(message_id, channel_hint, |record, settings| {
            record.add_star(user_id, user_bot, settings)
        })
        .await
    }

    /// Withdraws the star `user_id` gave to a message.
    ///
    /// Untracked messages are never fetched since nobody can have starred them.
    ///
    /// # Returns
    /// - `Err(StarboardError::NotStarred)` - Message untracked or not starred by the member
    pub async fn remove_star(
        &self,
        message_id: MessageId,
        channel_hint: Option<ChannelId>,
        user_id: UserId,
        user_bot: bool,
    ) -> Result<StarboardMessage, AppError> {
        let Some(loaded) = self.get_or_load(message_id, channel_hint, false).await? else {
            return Err(StarboardError::NotStarred.into());
        };

        self.commit(message_id, loaded, |record, settings| {
            record.remove_star(user_id, user_bot, settings)
        })
        .await
    }

    /// Drops every star of a tracked message.
    ///
    /// Untracked messages are left alone since they have no stars to clear.
    ///
    /// # Returns
    /// - `Ok(true)` - Stars were removed and the message was queued
    /// - `Ok(false)` - Message untracked or without stars
    pub async fn clear_stars(&self, message_id: MessageId) -> Result<bool, AppError> {
        if self.get_or_load(message_id, None, false).await?.is_none() {
            return Ok(false);
        }

        let mut state = self.state.lock().await;
        let Some(record) = state.cache.get_mut(&message_id) else {
            return Ok(false);
        };
        if !record.clear_stars() {
            return Ok(false);
        }
        StarboardMessageRepository::new(&self.db)
            .save(self.guild_id, record)
            .await?;
        record.mirror_dirty = false;
        enqueue_locked(&mut state, message_id);

        Ok(true)
    }

    /// Keeps a message off the starboard regardless of its stars.
    pub async fn hide(
        &self,
        message_id: MessageId,
        channel_hint: Option<ChannelId>,
    ) -> Result<StarboardMessage, AppError> {
        self.mutate(message_id, channel_hint, |record, _| record.hide())
            .await
    }

    /// Lets a hidden message back onto the starboard.
    pub async fn unhide(
        &self,
        message_id: MessageId,
        channel_hint: Option<ChannelId>,
    ) -> Result<StarboardMessage, AppError> {
        self.mutate(message_id, channel_hint, |record, _| record.unhide())
            .await
    }

    /// Sets or clears the starboard channel.
    ///
    /// The janitor is restarted so the new channel takes effect from a drained queue.
    ///
    /// # Arguments
    /// - `channel_id` - New starboard channel, `None` disables posting
    pub async fn set_channel(
        self: &Arc<Self>,
        channel_id: Option<ChannelId>,
    ) -> Result<(), AppError> {
        self.update_settings(|settings| {
            settings.channel_id = channel_id;
            Ok(())
        })
        .await?;

        self.ensure_janitor(true).await
    }

    /// Sets the number of stars needed for a mirror.
    ///
    /// # Returns
    /// - `Err(StarboardError::InvalidMinStars)` - `min_stars` is 0
    pub async fn set_min_stars(&self, min_stars: u32) -> Result<(), AppError> {
        self.update_settings(|settings| {
            if min_stars == 0 {
                return Err(StarboardError::InvalidMinStars);
            }
            settings.min_stars = min_stars;
            Ok(())
        })
        .await
    }

    pub async fn set_allow_selfstar(&self, allow_selfstar: bool) -> Result<(), AppError> {
        self.update_settings(|settings| {
            settings.allow_selfstar = allow_selfstar;
            Ok(())
        })
        .await
    }

    /// Sets the reaction emoji that counts as a star.
    pub async fn set_emoji(&self, emoji: String) -> Result<(), AppError> {
        self.update_settings(|settings| {
            settings.emoji = emoji;
            Ok(())
        })
        .await
    }

    /// Adds a member or channel to the ignore lists.
    ///
    /// # Returns
    /// - `Err(StarboardError::AlreadyIgnored)` - Target is already listed
    pub async fn ignore(&self, target: IgnoreTarget) -> Result<(), AppError> {
        let mut state = self.state.lock().await;
        if state.settings.is_listed(target) {
            return Err(StarboardError::AlreadyIgnored.into());
        }

        IgnoreRepository::new(&self.db)
            .create(self.guild_id, target)
            .await?;
        match target {
            IgnoreTarget::Member { id, .. } => state.settings.ignored_members.insert(id),
            IgnoreTarget::Channel(id) => state.settings.ignored_channels.insert(id),
        };

        Ok(())
    }

    /// Removes a member or channel from the ignore lists.
    ///
    /// # Returns
    /// - `Err(StarboardError::NotIgnored)` - Target isn't listed
    pub async fn unignore(&self, target: IgnoreTarget) -> Result<(), AppError> {
        let mut state = self.state.lock().await;
        if !state.settings.is_listed(target) {
            return Err(StarboardError::NotIgnored.into());
        }

        IgnoreRepository::new(&self.db)
            .delete(self.guild_id, target)
            .await?;
        match target {
            IgnoreTarget::Member { id, .. } => state.settings.ignored_members.remove(&id),
            IgnoreTarget::Channel(id) => state.settings.ignored_channels.remove(&id),
        };

        Ok(())
    }

    /// Blocks a member from starring and from being starred.
    pub async fn block(&self, user_id: UserId) -> Result<(), AppError> {
        self.ignore(IgnoreTarget::member(user_id)).await
    }

    pub async fn unblock(&self, user_id: UserId) -> Result<(), AppError> {
        self.unignore(IgnoreTarget::member(user_id)).await
    }

    /// Synchronizes every queued message in FIFO order.
    ///
    /// Each message is snapshotted under the state lock, synchronized with Discord
    /// without it, and the resulting mirror is written back and persisted. The
    /// configured sync delay is slept between messages.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of messages synchronized
    /// - `Err(AppError)` - Persisting a result failed, the rest of the queue is kept
    pub async fn flush_queue(&self) -> Result<usize, AppError> {
        let _flush = self.flush_lock.lock().await;
        let synchronizer = MirrorSynchronizer::new(self.gateway.as_ref());
        let mut flushed = 0;

        loop {
            let (record, settings) = {
                let mut guard = self.state.lock().await;
                let state = &mut *guard;
                let Some(message_id) = state.queue.pop_front() else {
                    break;
                };
                let Some(record) = state.cache.get_mut(&message_id) else {
                    continue;
                };
                record.in_queue = false;
                (record.clone(), state.settings.clone())
            };

            if flushed > 0 && !self.tuning.sync_delay.is_zero() {
                tokio::time::sleep(self.tuning.sync_delay).await;
            }

            let outcome = synchronizer.sync(&record, &settings).await;
            flushed += 1;

            let Some(outcome) = outcome else {
                continue;
            };

            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            let Some(current) = state.cache.get_mut(&record.message_id) else {
                continue;
            };
            if current.source.is_none() {
                current.source = outcome.source;
            }
            if current.mirror != outcome.mirror {
                current.mirror = outcome.mirror;
                current.mirror_dirty = true;
            }
            if current.mirror_dirty {
                let saved = StarboardMessageRepository::new(&self.db)
                    .save(self.guild_id, current)
                    .await;
                match saved {
                    Ok(()) => current.mirror_dirty = false,
                    Err(e) => {
                        // the mirror exists on Discord, retry persisting it on the next flush
                        enqueue_locked(state, record.message_id);
                        return Err(e.into());
                    }
                }
            }
        }

        Ok(flushed)
    }

    /// Evicts cache entries idle for at least `max_idle`.
    ///
    /// The queue is flushed first and queued entries are never evicted, so no pending
    /// update is lost.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of evicted entries
    pub async fn purge_cache(&self, max_idle: Duration) -> Result<usize, AppError> {
        self.flush_queue().await?;

        let mut state = self.state.lock().await;
        let before = state.cache.len();
        state
            .cache
            .retain(|_, record| record.in_queue || record.last_update.elapsed() < max_idle);

        Ok(before - state.cache.len())
    }

    /// Makes sure a janitor is running for the guild.
    ///
    /// A healthy janitor is left alone unless `overwrite` is set, in which case it is
    /// cancelled and its drain awaited before a new one starts. A crashed janitor is
    /// logged and replaced.
    pub async fn ensure_janitor(self: &Arc<Self>, overwrite: bool) -> Result<(), AppError> {
        let mut slot = self.janitor.lock().await;

        if let Some(janitor) = slot.take() {
            match janitor.status() {
                JanitorStatus::Running | JanitorStatus::Draining if !overwrite => {
                    *slot = Some(janitor);
                    return Ok(());
                }
                JanitorStatus::Crashed => {
                    let reason = match janitor.join().await {
                        Err(e) => e.to_string(),
                        Ok(()) => "exited unexpectedly".to_string(),
                    };
                    error!(
                        "Starboard janitor for guild {} crashed: {}",
                        self.guild_id, reason
                    );
                }
                _ => {
                    if let Err(e) = janitor.shutdown().await {
                        warn!(
                            "Starboard janitor for guild {} failed while draining: {}",
                            self.guild_id, e
                        );
                    }
                }
            }
        }

        *slot = Some(Janitor::spawn(Arc::downgrade(self), self.tuning));

        Ok(())
    }

    /// Stops the janitor, waiting for it to drain the queue.
    pub async fn shutdown_janitor(&self) -> Result<(), AppError> {
        let janitor = self.janitor.lock().await.take();

        match janitor {
            Some(janitor) => {
                janitor.shutdown().await?;
                info!("Starboard janitor for guild {} stopped", self.guild_id);
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub async fn janitor_status(&self) -> JanitorStatus {
        match self.janitor.lock().await.as_ref() {
            Some(janitor) => janitor.status(),
            None => JanitorStatus::Stopped,
        }
    }

    async fn mutate<F>(
        &self,
        message_id: MessageId,
        channel_hint: Option<ChannelId>,
        apply: F,
    ) -> Result<StarboardMessage, AppError>
    where
        F: FnOnce(&mut StarboardMessage, &GuildSettings) -> Result<(), StarboardError>,
    {
        let loaded = self
            .get_or_load(message_id, channel_hint, true)
            .await?
            .ok_or(StarboardError::MessageNotFound)?;

        self.commit(message_id, loaded, apply).await
    }

    async fn commit<F>(
        &self,
        message_id: MessageId,
        loaded: StarboardMessage,
        apply: F,
    ) -> Result<StarboardMessage, AppError>
    where
        F: FnOnce(&mut StarboardMessage, &GuildSettings) -> Result<(), StarboardError>,
    {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        // the janitor may have evicted the entry between the two locks
        let record = state.cache.entry(message_id).or_insert(loaded);

        apply(record, &state.settings)?;
        StarboardMessageRepository::new(&self.db)
            .save(self.guild_id, record)
            .await?;
        record.mirror_dirty = false;
        let snapshot = record.clone();
        enqueue_locked(state, message_id);

        Ok(snapshot)
    }

    async fn update_settings<F>(&self, apply: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut GuildSettings) -> Result<(), StarboardError>,
    {
        let mut state = self.state.lock().await;
        let mut settings = state.settings.clone();
        apply(&mut settings)?;

        GuildSettingsRepository::new(&self.db)
            .upsert(&settings)
            .await?;
        state.settings = settings;

        Ok(())
    }
}

fn enqueue_locked(state: &mut GuildState, message_id: MessageId) -> bool {
    match state.cache.get_mut(&message_id) {
        Some(record) if !record.in_queue => {
            record.in_queue = true;
            state.queue.push_back(message_id);
            true
        }
        _ => false,
    }
}
