//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot surface (event handlers and commands) and the data
//! layer. They own the starboard rules, coordinate repository calls and talk to
//! Discord through the gateway seam.

pub mod starboard;
