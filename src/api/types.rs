//! HTTP API request/response types.
//!
//! # Purpose
//! Defines shared payload shapes for the directory REST API and OpenAPI
//! schema generation.
use crate::model::Directory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

/// One page of directories plus links to the neighbouring pages.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct DirectoryListResponse {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Directory>,
}
