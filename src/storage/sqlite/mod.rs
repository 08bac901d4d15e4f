pub(super) mod error;
mod close_impl;
mod todos_impl;

#[cfg(any(test, feature = "integration_tests"))]
pub mod test_util;

use std::str::FromStr;

use crate::{
    config::types::StorageSettings, trace_err, utils::measure_metrics::measure_and_record_storage,
};
use error::{SqliteStartupError, SqliteStorageError};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool,
};
use tracing::{info, instrument};

pub(crate) static TODOS_TABLE: &str = "todos";

const CREATE_TODOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT    NOT NULL,
        is_complete BOOLEAN NOT NULL DEFAULT 0
    )
"#;

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// An in-memory database lives only as long as its one connection, so that
/// connection is never recycled.
fn pool_options(settings: &StorageSettings) -> SqlitePoolOptions {
    if is_in_memory(&settings.url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(settings.max_connections)
    }
}

pub(crate) struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    #[instrument(name = "Storage::new", skip_all, fields(url = %settings.url))]
    pub async fn new(settings: &StorageSettings) -> Result<Self, SqliteStartupError> {
        measure_and_record_storage("Storage::new", || async {
            let options = trace_err!(
                SqliteConnectOptions::from_str(&settings.url),
                "failed to parse database url"
            )
            .map_err(SqliteStartupError::InvalidUrl)?
            .create_if_missing(true);

            let pool = trace_err!(
                pool_options(settings).connect_with(options).await,
                "failed to open sqlite pool"
            )
            .map_err(SqliteStartupError::Connect)?;

            let storage = Self { pool };
            storage.ensure_schema().await?;

            info!(max_connections = settings.max_connections, "sqlite storage ready");

            Ok::<Self, SqliteStartupError>(storage)
        })
        .await
    }

    #[instrument(name = "Storage::ensure_schema", skip_all, fields(table = TODOS_TABLE))]
    pub(crate) async fn ensure_schema(&self) -> Result<(), SqliteStartupError> {
        trace_err!(
            sqlx::query(CREATE_TODOS_TABLE).execute(&self.pool).await,
            "failed to create todos table"
        )
        .map(|_| ())
        .map_err(SqliteStartupError::CreateSchema)
    }

    /// Connection is handed back to the pool when the returned guard drops.
    async fn acquire(&self) -> Result<PoolConnection<Sqlite>, SqliteStorageError> {
        trace_err!(
            self.pool.acquire().await,
            "failed to acquire sqlite connection"
        )
        .map_err(SqliteStorageError::Acquire)
    }
}
