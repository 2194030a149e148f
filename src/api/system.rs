//! Status API handler.
//!
//! # Purpose
//! Liveness check used by operators and load balancers. Must stay fast and
//! side-effect free.
use axum::Json;

#[utoipa::path(
    get,
    path = "/status/",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = String, example = json!("pong"))
    )
)]
/// Answer `"pong"` unconditionally.
pub(crate) async fn status() -> Json<&'static str> {
    Json("pong")
}
