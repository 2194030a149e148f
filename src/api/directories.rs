//! Directory API handlers.
//!
//! # Purpose
//! Implements directory list/create/read/replace/patch/delete endpoints with
//! consistent error mapping for validation failures and missing records.
//!
//! # Notes
//! - Bodies are extracted as raw JSON and validated here, so a mistyped field
//!   is a 400 with a precise message rather than an extractor rejection.
//! - A path id that is not all ASCII digits, or overflows `u64`, is a 404,
//!   matching an unmatched route.
//! - Existence is checked before the body is inspected on replace and patch.
use crate::api::error::{ApiError, api_internal, api_not_found, api_validation_error};
use crate::api::pagination::PageRequest;
use crate::api::types::DirectoryListResponse;
use crate::app::AppState;
use crate::model::{Directory, DirectoryPatchRequest, DirectoryRequest};
use crate::store::StoreError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use std::collections::HashMap;

/// Ids are plain ASCII digits; a sign or surrounding whitespace is a 404.
fn directory_id(path: Result<Path<String>, PathRejection>) -> Result<u64, ApiError> {
    let Ok(Path(raw)) = path else {
        return Err(api_not_found("directory not found"));
    };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(api_not_found("directory not found"));
    }
    raw.parse::<u64>()
        .map_err(|_| api_not_found("directory not found"))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected directory request body");
        api_validation_error(&rejection.body_text())
    })
}

fn store_error(action: &str, err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound(_) => api_not_found("directory not found"),
        err => api_internal(&format!("failed to {action} directory"), &err),
    }
}

#[utoipa::path(
    get,
    path = "/directories/",
    tag = "directories",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number, default 1"),
        ("page_size" = Option<u64>, Query, description = "Records per page, default 10")
    ),
    responses(
        (status = 200, description = "One page of directories", body = DirectoryListResponse),
        (status = 400, description = "Invalid paging parameters", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn list_directories(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Json<DirectoryListResponse>, ApiError> {
    let request = PageRequest::from_query(&params, &state.pagination)?;
    let (start, end) = request.window();
    let page = state
        .store
        .list_directories(start, end)
        .await
        .map_err(|err| api_internal("failed to list directories", &err))?;
    Ok(Json(request.into_list_response(page)))
}

#[utoipa::path(
    post,
    path = "/directories/",
    tag = "directories",
    request_body = DirectoryRequest,
    responses(
        (status = 201, description = "Directory created", body = Directory),
        (status = 400, description = "Invalid payload", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_directory(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = json_body(body)?;
    let request = DirectoryRequest::from_value(&payload)?;
    let created = state
        .store
        .create_directory(request)
        .await
        .map_err(|err| store_error("create", err))?;
    tracing::debug!(id = created.id, "directory created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/directories/{id}/",
    tag = "directories",
    params(
        ("id" = u64, Path, description = "Directory identifier")
    ),
    responses(
        (status = 200, description = "Fetch directory", body = Directory),
        (status = 404, description = "Directory not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_directory(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Directory>, ApiError> {
    let id = directory_id(path)?;
    match state.store.get_directory(id).await {
        Ok(directory) => Ok(Json(directory)),
        Err(err) => Err(store_error("fetch", err)),
    }
}

#[utoipa::path(
    put,
    path = "/directories/{id}/",
    tag = "directories",
    params(
        ("id" = u64, Path, description = "Directory identifier")
    ),
    request_body = DirectoryRequest,
    responses(
        (status = 200, description = "Directory replaced", body = Directory),
        (status = 400, description = "Invalid payload", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Directory not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn replace_directory(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Directory>, ApiError> {
    let id = directory_id(path)?;
    ensure_directory_exists(&state, id).await?;
    let payload = json_body(body)?;
    let request = DirectoryRequest::from_value(&payload)?;
    match state.store.replace_directory(id, request).await {
        Ok(updated) => Ok(Json(updated)),
        Err(err) => Err(store_error("replace", err)),
    }
}

#[utoipa::path(
    patch,
    path = "/directories/{id}/",
    tag = "directories",
    params(
        ("id" = u64, Path, description = "Directory identifier")
    ),
    request_body = DirectoryPatchRequest,
    responses(
        (status = 200, description = "Directory updated", body = Directory),
        (status = 400, description = "Invalid payload", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Directory not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn patch_directory(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Directory>, ApiError> {
    let id = directory_id(path)?;
    ensure_directory_exists(&state, id).await?;
    let payload = json_body(body)?;
    let patch = DirectoryPatchRequest::from_value(&payload)?;
    match state.store.patch_directory(id, patch).await {
        Ok(updated) => Ok(Json(updated)),
        Err(err) => Err(store_error("update", err)),
    }
}

#[utoipa::path(
    delete,
    path = "/directories/{id}/",
    tag = "directories",
    params(
        ("id" = u64, Path, description = "Directory identifier")
    ),
    responses(
        (status = 204, description = "Directory deleted"),
        (status = 404, description = "Directory not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_directory(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let id = directory_id(path)?;
    match state.store.delete_directory(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => Err(store_error("delete", err)),
    }
}

async fn ensure_directory_exists(state: &AppState, id: u64) -> Result<(), ApiError> {
    state
        .store
        .get_directory(id)
        .await
        .map(|_| ())
        .map_err(|err| store_error("fetch", err))
}
