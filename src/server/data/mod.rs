//! Database repository layer for the starboard.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from the starboard services. Discord ids are stored as strings
//! and parsed back into Serenity id types at this boundary.

pub mod guild_settings;
pub mod ignore;
pub mod starboard_message;
