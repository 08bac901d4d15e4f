use std::sync::Arc;

use crate::{
    storage::{CloseStorage, NewTodoItem, TodoStorage},
    Settings,
};

use super::SqliteStorage;

/// Builds storage backed by a private in-memory database taken from
/// `config/test.toml`.
pub struct TestStorageBuilder {
    todos: Vec<NewTodoItem>,
}

impl TestStorageBuilder {
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    pub fn with_todos(mut self, count: usize) -> Self {
        self.todos = (0..count)
            .map(|i| NewTodoItem::new(&format!("todo {}", i), i % 2 == 1))
            .collect();
        self
    }

    async fn open(&self) -> Arc<SqliteStorage> {
        let storage = SqliteStorage::new(&test_settings().storage)
            .await
            .unwrap();

        for todo in &self.todos {
            storage.insert(todo.clone()).await.unwrap();
        }

        Arc::new(storage)
    }

    pub async fn build(&self) -> (Arc<dyn TodoStorage>, Arc<dyn CloseStorage>) {
        let storage = self.open().await;
        (
            storage.clone() as Arc<dyn TodoStorage>,
            storage as Arc<dyn CloseStorage>,
        )
    }

    pub async fn build_todo(&self) -> Arc<dyn TodoStorage> {
        self.build().await.0
    }

    pub fn todos(&self) -> Vec<NewTodoItem> {
        self.todos.clone()
    }
}

impl Default for TestStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn test_settings() -> Settings {
    Settings::from_file("test").unwrap()
}
