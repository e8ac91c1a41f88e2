//! Discord operations the starboard depends on.
//!
//! The coordinator and synchronizer only talk to Discord through `StarboardGateway`,
//! which keeps them testable without a live bot.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::{
    all::{ChannelId, CreateMessage, EditMessage, Message, MessageId},
    http::Http,
};

use crate::server::{
    error::gateway::GatewayError,
    model::{mirror::MirrorPost, starboard_message::MirrorRef},
    service::starboard::builder::create_embed,
};

/// Outbound Discord requests made by the starboard.
#[async_trait]
pub trait StarboardGateway: Send + Sync {
    /// Fetches a source message.
    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Message, GatewayError>;

    /// Posts a new mirror, returning its message id.
    async fn send_mirror(
        &self,
        channel_id: ChannelId,
        post: &MirrorPost,
    ) -> Result<MessageId, GatewayError>;

    /// Replaces the contents of an existing mirror.
    async fn edit_mirror(&self, mirror: MirrorRef, post: &MirrorPost) -> Result<(), GatewayError>;

    /// Deletes a mirror.
    async fn delete_mirror(&self, mirror: MirrorRef) -> Result<(), GatewayError>;
}

/// Gateway backed by Serenity's HTTP client.
pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    /// Creates a new SerenityGateway.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client shared with the bot
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl StarboardGateway for SerenityGateway {
    async fn fetch_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<Message, GatewayError> {
        Ok(self.http.get_message(channel_id, message_id).await?)
    }

    async fn send_mirror(
        &self,
        channel_id: ChannelId,
        post: &MirrorPost,
    ) -> Result<MessageId, GatewayError> {
        let message = CreateMessage::new()
            .content(&post.content)
            .embed(create_embed(post));

        let sent = channel_id.send_message(&self.http, message).await?;

        Ok(sent.id)
    }

    async fn edit_mirror(&self, mirror: MirrorRef, post: &MirrorPost) -> Result<(), GatewayError> {
        let edit = EditMessage::new()
            .content(&post.content)
            .embed(create_embed(post));

        self.http
            .edit_message(mirror.channel_id, mirror.message_id, &edit, vec![])
            .await?;

        Ok(())
    }

    async fn delete_mirror(&self, mirror: MirrorRef) -> Result<(), GatewayError> {
        self.http
            .delete_message(mirror.channel_id, mirror.message_id, None)
            .await?;

        Ok(())
    }
}
