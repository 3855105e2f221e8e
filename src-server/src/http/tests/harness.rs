use std::path::Path;

use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::Response,
    Router,
};
use tower::util::ServiceExt;

use crate::repository::init_db;
use crate::AppState;

use super::super::app_router;

pub(super) struct TestHarness {
    pub(super) router: Router,
}

impl TestHarness {
    pub(super) async fn setup() -> Self {
        let db_state = init_db(Path::new(":memory:")).await.expect("init db");
        let state = AppState::new(db_state);
        Self {
            router: app_router(state),
        }
    }

    pub(super) async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("response")
    }

    pub(super) async fn get_json(&self, path: &str) -> serde_json::Value {
        let response = self
            .send(Request::builder().uri(path).body(Body::empty()).expect("get request"))
            .await;
        decode_json(response).await
    }

    /// Create an item under `collection` and return its id
    pub(super) async fn create(&self, collection: &str, body: serde_json::Value) -> String {
        let response = self.send(json_request("POST", collection, body)).await;
        let created: serde_json::Value = decode_json(response).await;
        created["id"].as_str().expect("created id").to_string()
    }
}

pub(super) async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body bytes");
    serde_json::from_slice(&bytes).expect("decode json")
}

pub(super) fn json_request(method: &str, path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("json request body")))
        .expect("json request")
}

pub(super) fn empty_request(method: &str, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("request")
}
