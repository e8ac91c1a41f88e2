use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the starboard tables exist
/// before any guild is loaded.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
