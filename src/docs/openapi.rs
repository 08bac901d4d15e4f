use utoipa::OpenApi;

use crate::handlers::error::AppError;
use crate::handlers::types::{CreateTodo, UpdateTodo};
use crate::storage::TodoItem;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health,
        crate::handlers::todo::list,
        crate::handlers::todo::create,
        crate::handlers::todo::update_completion,
        crate::handlers::todo::delete,
    ),
    components(
        schemas(TodoItem, CreateTodo, UpdateTodo, AppError),
    ),
    tags(
        (name = "todos", description = "Endpoints to create and manage todo items"),
        (name = "health", description = "Liveness probe")
    ),
    info(
        title = "Todo API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
