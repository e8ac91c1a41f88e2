pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_starboard_guild_table;
mod m20260301_000002_create_starboard_ignore_table;
mod m20260301_000003_create_starboard_message_table;
mod m20260301_000004_create_starboard_starrer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_starboard_guild_table::Migration),
            Box::new(m20260301_000002_create_starboard_ignore_table::Migration),
            Box::new(m20260301_000003_create_starboard_message_table::Migration),
            Box::new(m20260301_000004_create_starboard_starrer_table::Migration),
        ]
    }
}
