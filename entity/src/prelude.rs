pub use super::starboard_guild::Entity as StarboardGuild;
pub use super::starboard_ignore::Entity as StarboardIgnore;
pub use super::starboard_message::Entity as StarboardMessage;
pub use super::starboard_starrer::Entity as StarboardStarrer;
