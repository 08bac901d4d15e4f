#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
use todo_api::build_app;
use todo_api::{CloseStorage, Service};
use std::sync::Arc;

pub use server::{spawn_test_app, TestAppHandle};
use todo_api::TestStorageBuilder;

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub async fn create_test_app() -> Router {
    create_test_app_with(TestStorageBuilder::new()).await
}

pub async fn create_test_app_with(builder: TestStorageBuilder) -> Router {
    let (todo_storage, close_storage) = builder.build().await;

    build_app(Service::new(todo_storage, close_storage))
}

/// Also hands back the close handle so a test can take storage away.
pub async fn create_test_app_with_close(builder: TestStorageBuilder) -> (Router, Arc<dyn CloseStorage>) {
    let (todo_storage, close_storage) = builder.build().await;

    (
        build_app(Service::new(todo_storage, close_storage.clone())),
        close_storage,
    )
}
