//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and carry
//! Serenity id types instead of the strings stored in the database. The starboard rules
//! that only depend on a single record (star bookkeeping, hide flags, ignore checks)
//! live on these models so they can be tested without a database.

pub mod mirror;
pub mod settings;
pub mod source;
pub mod starboard_message;
