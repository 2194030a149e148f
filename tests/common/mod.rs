#![allow(dead_code)]

use axum::body::Body;
use directory::app::{AppState, build_router};
use directory::config::PaginationConfig;
use directory::store::memory::InMemoryStore;
use std::sync::Arc;

pub type TestApp = axum::routing::RouterIntoService<Body, ()>;

pub fn app_with_pagination(pagination: PaginationConfig) -> TestApp {
    let state = AppState {
        store: Arc::new(InMemoryStore::new()),
        pagination,
    };
    build_router(state).into_service()
}

pub fn app() -> TestApp {
    app_with_pagination(PaginationConfig::default())
}

pub async fn read_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = read_bytes(response).await;
    serde_json::from_slice(&bytes).expect("json")
}
