//! OpenAPI schema aggregation for the directory API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document served
//! at `/openapi.json`.
use crate::api::{
    directories, system,
    types::{DirectoryListResponse, ErrorResponse},
};
use crate::model::{Directory, DirectoryPatchRequest, DirectoryRequest};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "directory-service",
        version = "v1",
        description = "In-memory contact directory HTTP API"
    ),
    paths(
        system::status,
        directories::list_directories,
        directories::create_directory,
        directories::get_directory,
        directories::replace_directory,
        directories::patch_directory,
        directories::delete_directory
    ),
    components(schemas(
        Directory,
        DirectoryRequest,
        DirectoryPatchRequest,
        DirectoryListResponse,
        ErrorResponse
    )),
    tags(
        (name = "system", description = "Service status"),
        (name = "directories", description = "Contact directory records")
    )
)]
pub struct ApiDoc;

pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("serialize");
        let paths = doc["paths"].as_object().expect("paths");
        assert!(paths.contains_key("/status/"));
        assert!(paths.contains_key("/directories/"));
        let item = paths["/directories/{id}/"].as_object().expect("item path");
        for method in ["get", "put", "patch", "delete"] {
            assert!(item.contains_key(method), "missing {method}");
        }
        assert!(doc["components"]["schemas"]["Directory"].is_object());
    }
}
