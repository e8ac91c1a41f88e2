//! SeaORM entity models for the starboard tables.

pub mod prelude;

pub mod starboard_guild;
pub mod starboard_ignore;
pub mod starboard_message;
pub mod starboard_starrer;
