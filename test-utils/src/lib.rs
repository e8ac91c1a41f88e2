//! Starboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the starboard
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories for inserting starboard rows, and Serenity fixtures.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Insert starboard entities with sensible defaults
//! - **serenity**: Build Serenity model objects from JSON the way Discord sends them
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_starboard_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
