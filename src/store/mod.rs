use crate::model::{Directory, DirectoryPatchRequest, DirectoryRequest};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

/// One window of the creation-ordered collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: usize,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Records in `[start, end)` of creation order, clipped to the collection.
    async fn list_directories(&self, start: usize, end: usize) -> StoreResult<Page<Directory>>;
    async fn create_directory(&self, request: DirectoryRequest) -> StoreResult<Directory>;
    async fn get_directory(&self, id: u64) -> StoreResult<Directory>;
    async fn replace_directory(&self, id: u64, request: DirectoryRequest)
    -> StoreResult<Directory>;
    async fn patch_directory(&self, id: u64, patch: DirectoryPatchRequest)
    -> StoreResult<Directory>;
    async fn delete_directory(&self, id: u64) -> StoreResult<()>;

    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
