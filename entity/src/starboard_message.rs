use sea_orm::entity::prelude::*;

/// Star bookkeeping for a single source message.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starboard_message")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub message_id: String,
    pub guild_id: String,
    pub channel_id: String,
    pub author_id: String,
    pub author_bot: bool,
    pub hidden: bool,
    pub mirror_channel_id: Option<String>,
    pub mirror_message_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
