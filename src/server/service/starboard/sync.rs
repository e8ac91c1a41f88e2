//! Mirror synchronization.
//!
//! Brings the mirror of a tracked message in line with its state: posts it when the
//! message qualifies, edits it when the count changes and deletes it when the message
//! stops qualifying. Discord failures are logged and folded into the returned mirror
//! reference, they never propagate to the caller. A source message that can't be
//! fetched for any reason other than being gone leaves the mirror untouched.

use serenity::all::ChannelId;
use tracing::{debug, error, warn};

use crate::server::{
    error::gateway::GatewayError,
    model::{
        mirror::MirrorPost,
        settings::GuildSettings,
        source::SourceMessage,
        starboard_message::{MirrorRef, StarboardMessage},
    },
    service::starboard::{builder::build_mirror_post, gateway::StarboardGateway},
};

/// Result of one synchronization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    /// Mirror reference after the pass, `None` when no mirror exists.
    pub mirror: Option<MirrorRef>,
    /// Source snapshot fetched during the pass, if one was needed.
    pub source: Option<SourceMessage>,
}

/// Performs the Discord side of a queued update.
pub struct MirrorSynchronizer<'a> {
    gateway: &'a dyn StarboardGateway,
}

impl<'a> MirrorSynchronizer<'a> {
    /// Creates a new MirrorSynchronizer.
    ///
    /// # Arguments
    /// - `gateway` - Discord operations used for fetching and mirroring
    pub fn new(gateway: &'a dyn StarboardGateway) -> Self {
        Self { gateway }
    }

    /// Synchronizes the mirror of a message snapshot.
    ///
    /// The snapshot is taken at dequeue time, later mutations are picked up by the
    /// next pass since they enqueue the message again.
    ///
    /// # Arguments
    /// - `record` - Message state to mirror
    /// - `settings` - Guild settings at dequeue time
    ///
    /// # Returns
    /// - `Some(SyncOutcome)` - The resulting mirror and any freshly fetched source
    /// - `None` - No starboard channel is configured, nothing was done
    pub async fn sync(
        &self,
        record: &StarboardMessage,
        settings: &GuildSettings,
    ) -> Option<SyncOutcome> {
        let channel_id = settings.channel_id?;
        let mut mirror = record.mirror;
        let mut fetched = None;

        let eligible = record.is_eligible(settings.min_stars);
        if eligible && record.source.is_none() {
            match self.fetch_source(record).await {
                Ok(source) => fetched = source,
                Err(e) => {
                    warn!(
                        "Failed to fetch source message {}, keeping its mirror: {}",
                        record.message_id, e
                    );
                    return Some(SyncOutcome {
                        mirror: record.mirror,
                        source: None,
                    });
                }
            }
        }

        // mirrors left behind in a previous starboard channel are moved
        if let Some(existing) = mirror.filter(|m| m.channel_id != channel_id) {
            debug!(
                "Relocating mirror {} of message {} to channel {}",
                existing.message_id, record.message_id, channel_id
            );
            self.delete(existing).await;
            mirror = None;
        }

        let source = record
            .source
            .as_ref()
            .or(fetched.as_ref())
            .filter(|source| eligible && source.is_displayable());

        mirror = match (source, mirror) {
            (Some(source), existing) => {
                let post = build_mirror_post(settings.guild_id, &settings.emoji, record, source);
                match existing {
                    Some(existing) => self.edit(existing, &post).await,
                    None => self.send(channel_id, record, &post).await,
                }
            }
            (None, Some(existing)) => {
                self.delete(existing).await;
                None
            }
            (None, None) => None,
        };

        Some(SyncOutcome {
            mirror,
            source: fetched,
        })
    }

    /// Fetches the source of a record.
    ///
    /// # Returns
    /// - `Ok(Some(SourceMessage))` - Fresh snapshot
    /// - `Ok(None)` - The message was deleted
    /// - `Err(GatewayError)` - Missing access or Discord failure, the message may still exist
    async fn fetch_source(
        &self,
        record: &StarboardMessage,
    ) -> Result<Option<SourceMessage>, GatewayError> {
        match self
            .gateway
            .fetch_message(record.channel_id, record.message_id)
            .await
        {
            Ok(message) => Ok(Some(SourceMessage::from_message(&message))),
            Err(GatewayError::NotFound) => {
                debug!("Source message {} no longer exists", record.message_id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn send(
        &self,
        channel_id: ChannelId,
        record: &StarboardMessage,
        post: &MirrorPost,
    ) -> Option<MirrorRef> {
        match self.gateway.send_mirror(channel_id, post).await {
            Ok(message_id) => {
                debug!(
                    "Posted mirror {} for message {}",
                    message_id, record.message_id
                );
                Some(MirrorRef {
                    channel_id,
                    message_id,
                })
            }
            Err(GatewayError::Forbidden) => {
                warn!(
                    "Missing permissions to post in starboard channel {}",
                    channel_id
                );
                None
            }
            Err(e) => {
                error!(
                    "Failed to post mirror for message {}: {}",
                    record.message_id, e
                );
                None
            }
        }
    }

    async fn edit(&self, existing: MirrorRef, post: &MirrorPost) -> Option<MirrorRef> {
        match self.gateway.edit_mirror(existing, post).await {
            Ok(()) => Some(existing),
            Err(GatewayError::NotFound) => {
                // deleted by hand, post a fresh one once
                debug!("Mirror {} disappeared, reposting", existing.message_id);
                match self.gateway.send_mirror(existing.channel_id, post).await {
                    Ok(message_id) => Some(MirrorRef {
                        channel_id: existing.channel_id,
                        message_id,
                    }),
                    Err(e) => {
                        warn!("Failed to repost mirror: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                warn!("Failed to edit mirror {}: {}", existing.message_id, e);
                Some(existing)
            }
        }
    }

    async fn delete(&self, existing: MirrorRef) {
        match self.gateway.delete_mirror(existing).await {
            Ok(()) | Err(GatewayError::NotFound) => {}
            Err(e) => warn!("Failed to delete mirror {}: {}", existing.message_id, e),
        }
    }
}
