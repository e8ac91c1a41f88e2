//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating starboard rows with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let guild = factory::starboard_guild::create_guild_settings(&db).await?;
//!
//!     // Customize with the builder
//!     let message = factory::starboard_message::StarboardMessageFactory::new(&db, &guild.guild_id)
//!         .starrers(vec![1, 2, 3])
//!         .mirror("555", "666")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `starboard_guild` - Create per-guild settings rows
//! - `starboard_ignore` - Create ignored member and channel rows
//! - `starboard_message` - Create tracked messages together with their starrers

pub mod helpers;
pub mod starboard_guild;
pub mod starboard_ignore;
pub mod starboard_message;

pub use starboard_guild::create_guild_settings;
pub use starboard_ignore::{create_ignored_channel, create_ignored_member};
pub use starboard_message::create_starboard_message;
