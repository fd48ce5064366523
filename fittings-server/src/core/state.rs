use crate::core::{Config, Result};
use crate::db::DbService;
use sqlx::SqlitePool;

/// Server state shared by every handler
///
/// Cloning is cheap: `Config` is small and the pool is reference counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | immutable settings |
/// | db | DbService | process-wide SQLite pool |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Open the database and apply migrations
    ///
    /// Fails if the database file cannot be opened or the schema cannot be
    /// applied; the process should not start serving in that case.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::open(config).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// State backed by a private in-memory database
    pub async fn in_memory(config: Config) -> Result<Self> {
        let db = DbService::in_memory().await?;
        Ok(Self::new(config, db))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// Release pooled connections
    pub async fn shutdown(&self) {
        self.db.close().await;
    }
}
