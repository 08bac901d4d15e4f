use thiserror::Error;

use super::SqliteStorageError;
use strum_macros::AsRefStr;

#[derive(Error, Debug, AsRefStr)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error("Internal storage error")]
    Internal(#[source] SqliteStorageError),
}

impl From<SqliteStorageError> for StorageError {
    fn from(value: SqliteStorageError) -> Self {
        match value {
            SqliteStorageError::NotFound => Self::NotFound,
            other => Self::Internal(other),
        }
    }
}
