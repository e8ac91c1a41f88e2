//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::message::{create_test_message, TestMessage};
//!
//! let message = create_test_message(TestMessage {
//!     content: "hello",
//!     ..TestMessage::new(1, 2, 3, 4)
//! });
//! ```
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;

pub use message::{create_test_message, TestMessage};
