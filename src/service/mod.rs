pub(crate) mod todo;

use std::sync::Arc;

use crate::{
    storage::{CloseStorage, TodoStorage},
    utils::measure_metrics::measure_and_record_service,
};
use todo::ServiceTodoRef;
use tracing::instrument;

use crate::handlers::error::AppError;

#[derive(Clone)]
pub struct Service {
    todo_storage: Arc<dyn TodoStorage>,
    close_storage: Arc<dyn CloseStorage>,
}

impl Service {
    #[instrument(name = "Service::new", skip_all)]
    pub fn new(todo_storage: Arc<dyn TodoStorage>, close_storage: Arc<dyn CloseStorage>) -> Self {
        Self {
            todo_storage,
            close_storage,
        }
    }

    pub fn todo(&self) -> ServiceTodoRef {
        ServiceTodoRef::new(self.todo_storage.clone())
    }

    pub async fn close_storage(&self) -> Result<(), AppError> {
        measure_and_record_service("close_storage", || async {
            self.close_storage.close().await;
            Ok::<(), AppError>(())
        })
        .await
    }
}
