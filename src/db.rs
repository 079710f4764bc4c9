// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use crate::config::DatabaseConfig;
use anyhow::{anyhow, Result};
use diesel::{Connection, PgConnection};
use diesel_async::{
    pooled_connection::{
        deadpool::{Object, Pool, PoolError},
        AsyncDieselConnectionManager,
    },
    AsyncPgConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection = Object<AsyncPgConnection>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Postgres-backed profile database
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Create a new database manager with connection pool
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.url);

        let pool = DbPool::builder(manager)
            .max_size(config.max_connections)
            .build()?;

        let db = Self { pool };

        // Test connection and run migrations
        db.initialize(config.url.clone()).await?;

        Ok(db)
    }

    async fn initialize(&self, url: String) -> Result<()> {
        let _conn = self.get_connection().await?;
        info!("Successfully connected to the database");

        // Migrations run on a blocking connection
        tokio::task::spawn_blocking(move || run_migrations(&url))
            .await
            .map_err(|e| anyhow!("Migration task failed: {}", e))??;

        Ok(())
    }

    /// Get a database connection from the pool
    pub async fn get_connection(&self) -> Result<DbConnection, PoolError> {
        self.pool.get().await
    }
}

/// Apply any pending embedded migrations
fn run_migrations(url: &str) -> Result<()> {
    let mut conn = PgConnection::establish(url)?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;
    info!("Database migrations applied successfully ({} new)", applied.len());

    Ok(())
}

/// Initialize database connection pool and run migrations
pub async fn init_database(config: &DatabaseConfig) -> Result<Database> {
    Database::new(config).await
}
