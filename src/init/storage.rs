use crate::{
    service::Service,
    storage::{CloseStorage, SqliteStorage, TodoStorage},
    Settings,
};
use std::sync::Arc;

use tracing::instrument;

use super::StartupError;

#[instrument(name = "init_storage", skip_all)]
pub async fn init_storage(settings: &Settings) -> Result<Service, StartupError> {
    let sqlite_storage = Arc::new(
        SqliteStorage::new(&settings.storage)
            .await
            .map_err(StartupError::OpenSqliteStorage)?,
    );

    Ok(Service::new(
        sqlite_storage.clone() as Arc<dyn TodoStorage>,
        sqlite_storage as Arc<dyn CloseStorage>,
    ))
}
