use crate::server::{
    data::guild_settings::GuildSettingsRepository, error::AppError,
    model::settings::GuildSettings,
};
use serenity::all::{ChannelId, GuildId, UserId};
use test_utils::{builder::TestBuilder, factory};

mod find;
mod get_or_create;
mod upsert;
