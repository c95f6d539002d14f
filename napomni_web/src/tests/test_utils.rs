use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use mongodb::options::ClientOptions;
use napomni_storage::{InMemoryReminderStorage, ReminderConnection, ReminderStorage, StorageError};
use tower::ServiceExt;

use crate::{AppState, router};

/// Storage whose every connection attempt fails.
pub struct UnreachableStorage;

#[async_trait]
impl ReminderStorage for UnreachableStorage {
    async fn connect(&self) -> Result<Box<dyn ReminderConnection>, StorageError> {
        let error = ClientOptions::parse("unreachable://nowhere")
            .await
            .unwrap_err();
        Err(error.into())
    }
}

pub struct TestContext {
    pub storage: InMemoryReminderStorage,
    pub app: Router,
}

impl TestContext {
    pub fn new() -> Self {
        let storage = InMemoryReminderStorage::new();
        let state = AppState::new(Arc::new(storage.clone())).unwrap();

        Self {
            storage,
            app: router(state),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        let request = Request::post(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()["location"].to_str().unwrap()
}
