mod error;
mod ids;
mod sqlite;
mod todo;

#[cfg(any(test, feature = "integration_tests"))]
pub use sqlite::test_util;
pub(crate) use sqlite::{
    error::{SqliteStartupError, SqliteStorageError},
    SqliteStorage,
};

use async_trait::async_trait;
pub(crate) use error::StorageError;
pub use ids::TodoId;
pub use todo::{NewTodoItem, TodoItem};

#[async_trait]
pub trait TodoStorage: Send + Sync {
    async fn get_all(&self) -> Result<Vec<TodoItem>, StorageError>;
    async fn insert(&self, item: NewTodoItem) -> Result<TodoId, StorageError>;
    async fn update_completion(&self, id: TodoId, is_complete: bool) -> Result<(), StorageError>;
    async fn delete(&self, id: TodoId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait CloseStorage: Send + Sync {
    async fn close(&self);
}
