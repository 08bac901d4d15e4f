use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    handlers::{error::AppError, CreateTodo, UpdateTodo},
    storage::{TodoId, TodoItem, TodoStorage},
    utils::measure_metrics::measure_and_record_service,
};

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    #[instrument(name = "Service::todo::list", skip_all)]
    pub(crate) async fn list(&self) -> Result<Vec<TodoItem>, AppError> {
        measure_and_record_service("list_todos", || async { self.storage.get_all().await })
            .await
            .map_err(Into::into)
    }

    /// Any `id` carried by the payload is dropped; the database picks one.
    #[instrument(name = "Service::todo::create", skip_all, fields(is_complete = input.is_complete))]
    pub(crate) async fn create(&self, input: &CreateTodo) -> Result<TodoId, AppError> {
        if let Some(ignored) = input.id {
            info!(ignored_id = ignored, "client supplied id is ignored");
        }

        measure_and_record_service("create_todo", || async {
            self.storage.insert(input.into()).await
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "Service::todo::update_completion", skip_all, fields(is_complete = patch.is_complete))]
    pub(crate) async fn update_completion(
        &self,
        id: TodoId,
        patch: &UpdateTodo,
    ) -> Result<(), AppError> {
        info!(todo_id = %id, "update todo completion");

        measure_and_record_service("update_todo_completion", || async {
            self.storage.update_completion(id, patch.is_complete).await
        })
        .await
        .map_err(Into::into)
    }

    #[instrument(name = "Service::todo::delete", skip_all)]
    pub(crate) async fn delete(&self, id: TodoId) -> Result<(), AppError> {
        info!(todo_id = %id, "delete todo");

        measure_and_record_service("delete_todo", || async { self.storage.delete(id).await })
            .await
            .map_err(Into::into)
    }
}
