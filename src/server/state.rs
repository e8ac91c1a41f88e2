use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::starboard::StarboardRegistry;

/// Shared application state handed to event handlers and commands.
///
/// Cheap to clone, every clone shares the same registry and connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Per-guild starboard coordinators.
    pub registry: Arc<StarboardRegistry>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `registry` - Starboard registry shared by handlers and commands
    ///
    /// # Returns
    /// - `AppState` - Initialized application state
    pub fn new(db: DatabaseConnection, registry: Arc<StarboardRegistry>) -> Self {
        Self { db, registry }
    }
}
