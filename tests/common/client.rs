#![allow(dead_code)]
use reqwest::Url;
use serde_json::Value;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn todos_url(&self) -> Url {
        self.url.join("todos").unwrap()
    }

    fn todo_url(&self, id: &str) -> Url {
        self.url.join("todos/").unwrap().join(id).unwrap()
    }

    pub async fn list_todos(&self) -> reqwest::Response {
        self.client.get(self.todos_url()).send().await.unwrap()
    }

    pub async fn create_todo(&self, name: &str, is_complete: bool) -> reqwest::Response {
        self.create_todo_raw(serde_json::json!({
            "name": name,
            "isComplete": is_complete,
        }))
        .await
    }

    pub async fn create_todo_raw(&self, body: Value) -> reqwest::Response {
        self.client
            .post(self.todos_url())
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo(&self, id: &str, is_complete: bool) -> reqwest::Response {
        self.update_todo_raw(
            id,
            serde_json::json!({
                "isComplete": is_complete,
            }),
        )
        .await
    }

    pub async fn update_todo_raw(&self, id: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.todo_url(id))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_text(&self, url: Url, body: &'static str) -> reqwest::Response {
        self.client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo_text(&self, body: &'static str) -> reqwest::Response {
        self.post_text(self.todos_url(), body).await
    }

    pub async fn update_todo_text(&self, id: &str, body: &'static str) -> reqwest::Response {
        self.post_text(self.todo_url(id), body).await
    }

    pub async fn create_todo_without_content_type(&self, body: &'static str) -> reqwest::Response {
        self.client
            .post(self.todos_url())
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_todo(&self, id: &str) -> reqwest::Response {
        self.client.delete(self.todo_url(id)).send().await.unwrap()
    }

    pub async fn health(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("health").unwrap())
            .send()
            .await
            .unwrap()
    }
}
