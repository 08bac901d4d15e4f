use super::error::AppError;
use super::types::*;
use crate::{
    handlers::Service,
    storage::{TodoId, TodoItem},
    utils::RootSpan,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Extension, Json,
};
use tracing::info;

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "List all todos", body = Vec<TodoItem>),
        (status = 500, description = "Storage failure"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::list", skip_all)]
pub(crate) async fn list(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
) -> Result<impl IntoResponse, AppError> {
    let items = service.todo().list().await?;

    root_span.record().todo_count(items.len());
    info!("Get {} ToDos", items.len());

    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body(
        content = CreateTodo,
        description = "New ToDo item, `id` is ignored",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "ToDo created", body = i64),   // returns ID
        (status = 400, description = "Malformed JSON"),
        (status = 415, description = "Missing JSON content type"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::create", skip_all)]
pub(crate) async fn create(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    input: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = input?;

    match service.todo().create(&input).await {
        Ok(id) => {
            root_span.record().todo_id(&id);
            Ok(Json(id))
        }
        Err(e) => {
            tracing::error!(err = ?e, "failed to add new ToDo");
            Err(e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/todos/{id}",
    params(
        ("id" = i64, Path, description = "ToDo ID")
    ),
    request_body(
        content = UpdateTodo,
        description = "New completion state, other fields are ignored",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "ToDo updated"),
        (status = 400, description = "Malformed JSON or id"),
        (status = 404, description = "ToDo not found"),
        (status = 415, description = "Missing JSON content type"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::update_completion", skip_all)]
pub(crate) async fn update_completion(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    id: Result<Path<TodoId>, PathRejection>,
    input: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<(), AppError> {
    let Path(id) = id?;
    root_span.record().todo_id(&id);

    let Json(input) = input?;
    service.todo().update_completion(id, &input).await?;

    Ok(())
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(
        ("id" = i64, Path, description = "ToDo ID")
    ),
    responses(
        (status = 200, description = "ToDo deleted"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "ToDo not found"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::delete", skip_all)]
pub(crate) async fn delete(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<(), AppError> {
    let Path(id) = id?;
    root_span.record().todo_id(&id);

    service.todo().delete(id).await?;

    Ok(())
}
