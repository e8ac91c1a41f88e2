use crate::server::{data::ignore::IgnoreRepository, model::settings::IgnoreTarget};
use sea_orm::DbErr;
use serenity::all::{ChannelId, GuildId, UserId};
use test_utils::builder::TestBuilder;

mod create;
mod delete;
