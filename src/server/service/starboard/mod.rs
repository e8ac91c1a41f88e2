//! Starboard services.
//!
//! - `guild` - Per-guild coordinator owning the cache, queue and settings
//! - `registry` - Map from guild to coordinator, owned by the application state
//! - `sync` - Decides whether a mirror is posted, edited or deleted and performs it
//! - `builder` - Renders mirror posts
//! - `gateway` - Discord operations used by the above

pub mod builder;
pub mod gateway;
pub mod guild;
pub mod registry;
pub mod sync;

pub use guild::GuildStarboard;
pub use registry::StarboardRegistry;

#[cfg(test)]
mod test;
