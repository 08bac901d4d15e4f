use super::TodoId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    #[schema(value_type = i64)]
    pub id: TodoId,
    pub name: String,
    pub is_complete: bool,
}

/// Row content before the database has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub name: String,
    pub is_complete: bool,
}

impl NewTodoItem {
    pub(crate) fn new(name: &str, is_complete: bool) -> Self {
        Self {
            name: name.to_owned(),
            is_complete,
        }
    }
}

impl From<&crate::handlers::CreateTodo> for NewTodoItem {
    fn from(value: &crate::handlers::CreateTodo) -> Self {
        Self::new(&value.name, value.is_complete)
    }
}
