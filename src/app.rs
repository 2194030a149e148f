//! Directory HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! Routes keep their trailing slashes; `/directories` and `/directories/`
//! are different routes.
use crate::api;
use crate::config::PaginationConfig;
use crate::observability;
use crate::store::DirectoryStore;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DirectoryStore + Send + Sync>,
    pub pagination: PaginationConfig,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    Router::new()
        .route("/status/", get(api::system::status))
        .route(
            "/directories/",
            get(api::directories::list_directories).post(api::directories::create_directory),
        )
        .route(
            "/directories/:id/",
            get(api::directories::get_directory)
                .put(api::directories::replace_directory)
                .patch(api::directories::patch_directory)
                .delete(api::directories::delete_directory),
        )
        .route("/openapi.json", get(api::openapi::openapi_json))
        .layer(trace_layer)
        .with_state(state)
}
