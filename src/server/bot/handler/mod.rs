use serenity::all::{ChannelId, Context, EventHandler, MessageId, Reaction, Ready};
use serenity::async_trait;

use crate::server::state::AppState;

pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.state, ctx, add_reaction).await;
    }

    /// Called when a reaction is removed from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction_remove(&self.state, ctx, removed_reaction).await;
    }

    /// Called when every reaction is removed from a message
    async fn reaction_remove_all(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        removed_from_message_id: MessageId,
    ) {
        reaction::handle_reaction_remove_all(&self.state, ctx, channel_id, removed_from_message_id)
            .await;
    }

    /// Called when every reaction of one emoji is removed from a message
    async fn reaction_remove_emoji(&self, ctx: Context, removed_reactions: Reaction) {
        reaction::handle_reaction_remove_emoji(&self.state, ctx, removed_reactions).await;
    }
}
