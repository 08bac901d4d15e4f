use crate::storage::{NewTodoItem, StorageError, TodoId, TodoItem, TodoStorage};
use crate::trace_err;
use crate::utils::measure_metrics::measure_and_record_storage;

use super::error::SqliteStorageError;
use super::SqliteStorage;
use async_trait::async_trait;
use tracing::{debug, info, instrument};


#[async_trait]
impl TodoStorage for SqliteStorage {
    #[instrument(name = "SqliteStorage::get_all_todos", skip_all)]
    async fn get_all(&self) -> Result<Vec<TodoItem>, StorageError> {
        measure_and_record_storage("SqliteStorage::get_all_todos", || async {
            let mut conn = self.acquire().await?;

            let items = trace_err!(
                sqlx::query_as::<_, TodoItem>(
                    "SELECT id, name, is_complete FROM todos ORDER BY id"
                )
                .fetch_all(&mut *conn)
                .await,
                "failed to read todos from storage"
            )
            .map_err(SqliteStorageError::Query)?;

            debug!(count = items.len(), "read todos");

            Ok::<_, SqliteStorageError>(items)
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "SqliteStorage::insert_todo", skip_all)]
    async fn insert(&self, item: NewTodoItem) -> Result<TodoId, StorageError> {
        measure_and_record_storage("SqliteStorage::insert_todo", || async {
            let mut conn = self.acquire().await?;

            let result = trace_err!(
                sqlx::query("INSERT INTO todos (name, is_complete) VALUES (?, ?)")
                    .bind(&item.name)
                    .bind(item.is_complete)
                    .execute(&mut *conn)
                    .await,
                "failed to write todo into storage"
            )
            .map_err(SqliteStorageError::Query)?;

            let id = TodoId::from(result.last_insert_rowid());
            info!(todo_id = %id, "inserted todo");

            Ok::<_, SqliteStorageError>(id)
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "SqliteStorage::update_todo_completion", skip_all)]
    async fn update_completion(&self, id: TodoId, is_complete: bool) -> Result<(), StorageError> {
        info!(todo_id = %id, is_complete, "update todo completion");

        measure_and_record_storage("SqliteStorage::update_todo_completion", || async {
            let mut conn = self.acquire().await?;

            let result = trace_err!(
                sqlx::query("UPDATE todos SET is_complete = ? WHERE id = ?")
                    .bind(is_complete)
                    .bind(id)
                    .execute(&mut *conn)
                    .await,
                "failed to update todo in storage"
            )
            .map_err(SqliteStorageError::Query)?;

            if result.rows_affected() == 0 {
                return Err(SqliteStorageError::NotFound);
            }

            Ok::<(), SqliteStorageError>(())
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "SqliteStorage::delete_todo", skip_all)]
    async fn delete(&self, id: TodoId) -> Result<(), StorageError> {
        info!(todo_id = %id, "delete todo");

        measure_and_record_storage("SqliteStorage::delete_todo", || async {
            let mut conn = self.acquire().await?;

            let result = trace_err!(
                sqlx::query("DELETE FROM todos WHERE id = ?")
                    .bind(id)
                    .execute(&mut *conn)
                    .await,
                "failed to remove todo from storage"
            )
            .map_err(SqliteStorageError::Query)?;

            if result.rows_affected() == 0 {
                return Err(SqliteStorageError::NotFound);
            }

            Ok::<(), SqliteStorageError>(())
        })
        .await
        .map_err(Into::into)
    }
}
