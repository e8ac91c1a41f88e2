//! Lookup of per-guild coordinators.

use std::{collections::HashMap, sync::Arc};

use sea_orm::DatabaseConnection;
use serenity::all::GuildId;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::server::{
    config::StarboardTuning,
    error::AppError,
    service::starboard::{gateway::StarboardGateway, GuildStarboard},
};

/// Owns the coordinator of every guild the bot has seen since startup.
///
/// Coordinators are created lazily on first access and live for the rest of the
/// process. Every lookup also checks the guild's janitor, restarting it if it crashed.
pub struct StarboardRegistry {
    db: DatabaseConnection,
    gateway: Arc<dyn StarboardGateway>,
    tuning: StarboardTuning,
    guilds: RwLock<HashMap<GuildId, Arc<GuildStarboard>>>,
}

impl StarboardRegistry {
    /// Creates an empty registry.
    ///
    /// # Arguments
    /// - `db` - Database connection handed to every coordinator
    /// - `gateway` - Discord operations handed to every coordinator
    /// - `tuning` - Janitor timings
    pub fn new(
        db: DatabaseConnection,
        gateway: Arc<dyn StarboardGateway>,
        tuning: StarboardTuning,
    ) -> Self {
        Self {
            db,
            gateway,
            tuning,
            guilds: RwLock::new(HashMap::new()),
        }
    }

    /// Gets the coordinator of a guild, loading it on first access.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to look up
    ///
    /// # Returns
    /// - `Ok(Arc<GuildStarboard>)` - Coordinator with a live janitor
    /// - `Err(AppError)` - Failed to load the guild's settings
    pub async fn get(&self, guild_id: GuildId) -> Result<Arc<GuildStarboard>, AppError> {
        let existing = self.guilds.read().await.get(&guild_id).cloned();

        let starboard = match existing {
            Some(starboard) => starboard,
            None => {
                let mut guilds = self.guilds.write().await;
                match guilds.get(&guild_id) {
                    Some(starboard) => starboard.clone(),
                    None => {
                        let starboard = GuildStarboard::load(
                            self.db.clone(),
                            self.gateway.clone(),
                            self.tuning,
                            guild_id,
                        )
                        .await?;
                        guilds.insert(guild_id, starboard.clone());
                        starboard
                    }
                }
            }
        };

        starboard.ensure_janitor(false).await?;

        Ok(starboard)
    }

    /// Number of guilds with a loaded coordinator.
    pub async fn len(&self) -> usize {
        self.guilds.read().await.len()
    }

    /// Stops every janitor, draining each guild's queue.
    ///
    /// Failures are logged per guild so one broken guild doesn't keep the others from
    /// draining.
    pub async fn shutdown(&self) {
        let guilds: Vec<Arc<GuildStarboard>> = self.guilds.read().await.values().cloned().collect();

        info!("Draining starboard queues for {} guilds", guilds.len());
        for starboard in guilds {
            if let Err(e) = starboard.shutdown_janitor().await {
                error!(
                    "Failed to drain starboard queue for guild {}: {}",
                    starboard.guild_id(),
                    e
                );
            }
        }
    }
}
