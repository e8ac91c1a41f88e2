use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, GuildId, Message, MessageId, UserId};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    factory::starboard_guild::StarboardGuildFactory,
    serenity::{create_test_message, TestMessage},
};

use crate::server::{
    config::StarboardTuning,
    error::AppError,
    service::starboard::{gateway::StarboardGateway, GuildStarboard},
};

use self::fake::FakeGateway;

mod guild;

pub const GUILD: u64 = 1;
pub const CHANNEL: u64 = 10;
pub const STARBOARD: u64 = 99;
pub const AUTHOR: u64 = 50;

/// Timings that keep the janitor idle so tests drive the queue themselves.
pub fn tuning() -> StarboardTuning {
    StarboardTuning {
        janitor_interval: Duration::from_secs(60),
        sync_delay: Duration::ZERO,
        cache_ttl: Duration::from_secs(600),
    }
}

pub fn user(id: u64) -> UserId {
    UserId::new(id)
}

pub fn message_id(id: u64) -> MessageId {
    MessageId::new(id)
}

pub fn channel() -> Option<ChannelId> {
    Some(ChannelId::new(CHANNEL))
}

/// A plain text message by `AUTHOR` in `CHANNEL`.
pub fn text_message(id: u64) -> Message {
    create_test_message(TestMessage {
        content: "a message worth starring",
        ..TestMessage::new(id, CHANNEL, GUILD, AUTHOR)
    })
}

pub struct Harness {
    pub test: TestContext,
    pub gateway: Arc<FakeGateway>,
    pub starboard: Arc<GuildStarboard>,
}

impl Harness {
    pub fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Makes `id` fetchable as a text message.
    pub fn with_message(&self, id: u64) -> MessageId {
        self.gateway.add_message(text_message(id));
        MessageId::new(id)
    }
}

/// Builds a guild with `STARBOARD` configured as its channel.
pub async fn setup(min_stars: i32) -> Harness {
    build(Some(STARBOARD), min_stars).await
}

/// Builds a guild without a starboard channel.
pub async fn setup_without_channel() -> Harness {
    build(None, 1).await
}

async fn build(starboard_channel: Option<u64>, min_stars: i32) -> Harness {
    let test = TestBuilder::new()
        .with_starboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut factory = StarboardGuildFactory::new(db)
        .guild_id(GUILD.to_string())
        .min_stars(min_stars);
    if let Some(channel_id) = starboard_channel {
        factory = factory.channel_id(channel_id.to_string());
    }
    factory.build().await.unwrap();

    let gateway = FakeGateway::new();
    let starboard = GuildStarboard::load(
        db.clone(),
        gateway.clone() as Arc<dyn StarboardGateway>,
        tuning(),
        GuildId::new(GUILD),
    )
    .await
    .unwrap();

    Harness {
        test,
        gateway,
        starboard,
    }
}

/// Reads the persisted mirror id of a message.
pub async fn stored_mirror(db: &DatabaseConnection, id: MessageId) -> Result<Option<String>, AppError> {
    use sea_orm::EntityTrait;

    let row = entity::prelude::StarboardMessage::find_by_id(id.to_string())
        .one(db)
        .await?;

    Ok(row.and_then(|row| row.mirror_message_id))
}
