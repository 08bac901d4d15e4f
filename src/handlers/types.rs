use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /todos`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTodo {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Body of `POST /todos/{id}`. Only the completion flag is read.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateTodo {
    pub is_complete: bool,
}
