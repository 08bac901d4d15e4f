use super::SqliteStorage;
use crate::storage::CloseStorage;
use async_trait::async_trait;
use tracing::{info, instrument};

#[async_trait]
impl CloseStorage for SqliteStorage {
    #[instrument(name = "SqliteStorage::close", skip_all)]
    async fn close(&self) {
        self.pool.close().await;
        info!("sqlite pool closed");
    }
}
