//! Starboard bot backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Bot Layer** (`bot/`) - Serenity event handlers and poise commands
//! - **Service Layer** (`service/`) - Per-guild coordinators, mirror synchronization
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models for settings, tracked messages and mirrors
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, starboard registry)
//! - **Startup** (`startup`) - Database connection, migrations and logging
//! - **Scheduler** (`scheduler/`) - Per-guild janitor tasks flushing the update queue
//!
//! # Event Flow
//!
//! 1. **Bot** receives a reaction or command and resolves the guild's coordinator
//! 2. **Service** applies the starboard rules, persists the change and queues the message
//! 3. **Scheduler** flushes the queue, posting, editing or deleting mirrors

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
