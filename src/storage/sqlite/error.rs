use strum_macros::AsRefStr;
use thiserror::Error;

#[derive(Error, Debug, AsRefStr)]
pub enum SqliteStartupError {
    #[error("Invalid database url")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("Failed to connect to sqlite database")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to create todos table")]
    CreateSchema(#[source] sqlx::Error),
}

#[derive(Error, Debug, AsRefStr)]
pub enum SqliteStorageError {
    #[error("Row for id not found")]
    NotFound,

    #[error("Failed to acquire connection from pool")]
    Acquire(#[source] sqlx::Error),

    #[error("Query failed")]
    Query(#[source] sqlx::Error),
}
