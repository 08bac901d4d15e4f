mod common;
use common::{
    create_test_app, create_test_app_with, create_test_app_with_close, spawn_test_app, ErrorBody,
    TestAppClient,
};
use reqwest::StatusCode;
use todo_api::{build_app, init_storage, Settings, TestStorageBuilder, TodoId, TodoItem};

async fn list(client: &TestAppClient) -> Vec<TodoItem> {
    let res = client.list_todos().await;
    assert_eq!(res.status(), StatusCode::OK);
    res.json::<Vec<TodoItem>>().await.unwrap()
}

#[tokio::test]
async fn empty_list() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    assert!(list(&client).await.is_empty());
}

#[tokio::test]
async fn list_uses_camel_case_shape() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    client.create_todo("buy milk", false).await;

    let body = client
        .list_todos()
        .await
        .json::<serde_json::Value>()
        .await
        .unwrap();
    assert_eq!(
        body,
        serde_json::json!([{"id": 1, "name": "buy milk", "isComplete": false}])
    );
}

#[tokio::test]
async fn full_lifecycle() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let res = client.create_todo("buy milk", false).await;
    assert_eq!(res.status(), StatusCode::OK);
    let id = res.json::<TodoId>().await.unwrap();

    let items = list(&client).await;
    assert_eq!(
        items,
        vec![TodoItem {
            id,
            name: "buy milk".to_string(),
            is_complete: false,
        }]
    );

    let res = client.update_todo(&id.to_string(), true).await;
    assert_eq!(res.status(), StatusCode::OK);

    let items = list(&client).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "buy milk");
    assert!(items[0].is_complete);

    let res = client.delete_todo(&id.to_string()).await;
    assert_eq!(res.status(), StatusCode::OK);

    assert!(list(&client).await.is_empty());

    let res = client.delete_todo(&id.to_string()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_ignores_id_and_defaults_completion() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let res = client
        .create_todo_raw(serde_json::json!({"id": 99, "name": "walk dog"}))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let id = res.json::<TodoId>().await.unwrap();
    assert_eq!(i64::from(id), 1);

    let items = list(&client).await;
    assert_eq!(items[0].id, id);
    assert!(!items[0].is_complete);
}

#[tokio::test]
async fn create_keeps_given_completion() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    client.create_todo("done already", true).await;

    let items = list(&client).await;
    assert!(items[0].is_complete);
}

#[tokio::test]
async fn create_accepts_empty_name() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let res = client.create_todo("", false).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(list(&client).await[0].name, "");
}

#[tokio::test]
async fn create_without_name_is_rejected() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let res = client
        .create_todo_raw(serde_json::json!({"isComplete": true}))
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "invalid_payload");

    assert!(list(&client).await.is_empty());
}

#[tokio::test]
async fn create_with_malformed_json_is_rejected() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let res = client.create_todo_text("{\"name\": ").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "invalid_payload");
}

#[tokio::test]
async fn update_ignores_name() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let id = client
        .create_todo("original", false)
        .await
        .json::<TodoId>()
        .await
        .unwrap();

    let res = client
        .update_todo_raw(
            &id.to_string(),
            serde_json::json!({"id": 5, "name": "renamed", "isComplete": true}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let items = list(&client).await;
    assert_eq!(items[0].id, id);
    assert_eq!(items[0].name, "original");
    assert!(items[0].is_complete);
}

#[tokio::test]
async fn update_nonexistent_todo() {
    let handle = spawn_test_app(create_test_app_with(TestStorageBuilder::new().with_todos(3)).await).await;
    let client = TestAppClient::new(handle.address.clone());
    let before = list(&client).await;

    let res = client.update_todo("42", true).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "not_found");

    assert_eq!(list(&client).await, before);
}

#[tokio::test]
async fn update_without_flag_is_rejected() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let id = client
        .create_todo("a", false)
        .await
        .json::<TodoId>()
        .await
        .unwrap();

    let res = client
        .update_todo_raw(&id.to_string(), serde_json::json!({"name": "b"}))
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    assert!(!list(&client).await[0].is_complete);
}

#[tokio::test]
async fn delete_nonexistent_todo() {
    let handle = spawn_test_app(create_test_app_with(TestStorageBuilder::new().with_todos(2)).await).await;
    let client = TestAppClient::new(handle.address.clone());
    let before = list(&client).await;

    let res = client.delete_todo("1000").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    assert_eq!(list(&client).await, before);
}

#[tokio::test]
async fn delete_only_removes_target() {
    let handle = spawn_test_app(create_test_app_with(TestStorageBuilder::new().with_todos(3)).await).await;
    let client = TestAppClient::new(handle.address.clone());
    let before = list(&client).await;

    let res = client.delete_todo(&before[1].id.to_string()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let after = list(&client).await;
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let res = client.update_todo("abc", true).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "invalid_id");
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = std::sync::Arc::new(TestAppClient::new(handle.address.clone()));

    let tasks: Vec<_> = (0..10)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                let res = client.create_todo(&format!("todo{i}"), false).await;
                assert_eq!(res.status(), StatusCode::OK);
                res.json::<TodoId>().await.unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);

    let items = list(&client).await;
    assert_eq!(items.len(), 10);
    let any_lost = (0..10).any(|i| !items.iter().any(|t| t.name == format!("todo{i}")));
    assert!(!any_lost);
}

#[tokio::test]
async fn health() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    assert_eq!(client.health().await.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_without_content_type_is_rejected() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let res = client
        .create_todo_without_content_type(r#"{"name": "buy milk"}"#)
        .await;
    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "invalid_payload");

    assert!(list(&client).await.is_empty());
}

#[tokio::test]
async fn update_with_malformed_json_is_rejected() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address.clone());

    let id = client
        .create_todo("a", false)
        .await
        .json::<TodoId>()
        .await
        .unwrap();

    let res = client
        .update_todo_text(&id.to_string(), "{\"isComplete\": ")
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "invalid_payload");

    assert!(!list(&client).await[0].is_complete);
}

#[tokio::test]
async fn closed_storage_is_internal_error() {
    let (app, close_storage) = create_test_app_with_close(TestStorageBuilder::new()).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address.clone());

    close_storage.close().await;

    let res = client.list_todos().await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!(body.error, "internal_storage");
    assert_eq!(body.message, "Internal storage error");

    let res = client.create_todo("a", false).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn storage_from_test_settings() {
    let settings = Settings::from_file("test").unwrap();
    let service = init_storage(&settings).await.unwrap();
    let handle = spawn_test_app(build_app(service.clone())).await;
    let client = TestAppClient::new(handle.address.clone());

    let id = client
        .create_todo("buy milk", false)
        .await
        .json::<TodoId>()
        .await
        .unwrap();
    assert_eq!(client.update_todo(&id.to_string(), true).await.status(), StatusCode::OK);

    let items = list(&client).await;
    assert_eq!(items.len(), 1);
    assert!(items[0].is_complete);

    service.close_storage().await.unwrap();
    assert_eq!(
        client.list_todos().await.status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
