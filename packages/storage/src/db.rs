// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides the shared SQLite pool and book storage handed to the API handlers

use std::path::Path;
use std::sync::Arc;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    SqlitePool,
};
use tracing::{debug, info};

use crate::books::BookStorage;
use crate::StorageResult;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub book_storage: Arc<BookStorage>,
}

impl DbState {
    /// Wrap an existing pool and make sure the schema is in place
    pub async fn new(pool: SqlitePool) -> StorageResult<Self> {
        let book_storage = Arc::new(BookStorage::new(pool.clone()));
        book_storage.initialize().await?;

        Ok(Self { pool, book_storage })
    }

    /// Open (creating if needed) the SQLite file at `database_path`
    pub async fn init_with_path(database_path: impl AsRef<Path>) -> StorageResult<Self> {
        let database_path = database_path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        debug!("Connecting to database: {}", database_path.display());

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("Database connection established");

        Self::new(pool).await
    }

    /// Private in-memory database. A single long-lived connection keeps the
    /// data alive for as long as the pool exists.
    pub async fn in_memory() -> StorageResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::new(pool).await
    }
}
