//! In-memory implementation of the directory store.
//!
//! # Purpose
//! Implements `DirectoryStore` over a creation-ordered `Vec` guarded by a
//! single `tokio::sync::RwLock`. This is the only backend: state lives for the
//! lifetime of the process and is lost on restart.
//!
//! # Consistency
//! - The record list and the id counter share one lock, so id assignment and
//!   list order can never disagree.
//! - Mutations take the write lock; reads take the read lock.
//!
//! # Identifiers
//! Ids come from a monotonically increasing counter starting at 1. They are
//! never reused, so deleting a record and creating another cannot produce two
//! live records with the same id.
//!
//! # Metrics
//! Updates `directory_changes_total{op}` and `directory_records_total`.
use super::{DirectoryStore, Page, StoreError, StoreResult};
use crate::model::{Directory, DirectoryPatchRequest, DirectoryRequest};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Directories {
    next_id: u64,
    records: Vec<Directory>,
}

impl Directories {
    fn position(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    fn get_mut(&mut self, id: u64) -> StoreResult<&mut Directory> {
        self.records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound("directory".into()))
    }
}

/// In-memory directory store.
///
/// Cloning shares the same underlying collection.
#[derive(Clone)]
pub struct InMemoryStore {
    directories: Arc<RwLock<Directories>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            directories: Arc::new(RwLock::new(Directories {
                next_id: 1,
                records: Vec::new(),
            })),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryStore for InMemoryStore {
    async fn list_directories(&self, start: usize, end: usize) -> StoreResult<Page<Directory>> {
        let guard = self.directories.read().await;
        let count = guard.records.len();
        let items = guard
            .records
            .iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .cloned()
            .collect();
        Ok(Page { items, count })
    }

    async fn create_directory(&self, request: DirectoryRequest) -> StoreResult<Directory> {
        let mut guard = self.directories.write().await;
        let record = Directory {
            id: guard.next_id,
            name: request.name,
            emails: request.emails,
        };
        guard.next_id += 1;
        guard.records.push(record.clone());
        metrics::counter!("directory_changes_total", "op" => "created").increment(1);
        metrics::gauge!("directory_records_total").set(guard.records.len() as f64);
        Ok(record)
    }

    async fn get_directory(&self, id: u64) -> StoreResult<Directory> {
        let guard = self.directories.read().await;
        guard
            .position(id)
            .map(|index| guard.records[index].clone())
            .ok_or_else(|| StoreError::NotFound("directory".into()))
    }

    async fn replace_directory(
        &self,
        id: u64,
        request: DirectoryRequest,
    ) -> StoreResult<Directory> {
        let mut guard = self.directories.write().await;
        let record = guard.get_mut(id)?;
        record.name = request.name;
        record.emails = request.emails;
        let updated = record.clone();
        metrics::counter!("directory_changes_total", "op" => "replaced").increment(1);
        Ok(updated)
    }

    async fn patch_directory(
        &self,
        id: u64,
        patch: DirectoryPatchRequest,
    ) -> StoreResult<Directory> {
        // The patch is validated before it gets here, so both fields land together.
        let mut guard = self.directories.write().await;
        let record = guard.get_mut(id)?;
        patch.apply(record);
        let updated = record.clone();
        metrics::counter!("directory_changes_total", "op" => "patched").increment(1);
        Ok(updated)
    }

    async fn delete_directory(&self, id: u64) -> StoreResult<()> {
        let mut guard = self.directories.write().await;
        let index = guard
            .position(id)
            .ok_or_else(|| StoreError::NotFound("directory".into()))?;
        guard.records.remove(index);
        metrics::counter!("directory_changes_total", "op" => "deleted").increment(1);
        metrics::gauge!("directory_records_total").set(guard.records.len() as f64);
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, emails: &[&str]) -> DirectoryRequest {
        DirectoryRequest {
            name: name.to_string(),
            emails: emails.iter().map(|email| email.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_in_creation_order() {
        let store = InMemoryStore::new();
        let ana = store
            .create_directory(request("Ana", &["a@x.com"]))
            .await
            .expect("ana");
        let bea = store
            .create_directory(request("Bea", &[]))
            .await
            .expect("bea");
        assert_eq!(ana.id, 1);
        assert_eq!(bea.id, 2);

        let page = store.list_directories(0, 10).await.expect("list");
        assert_eq!(page.count, 2);
        assert_eq!(page.items, vec![ana.clone(), bea]);
        assert_eq!(store.get_directory(1).await.expect("get"), ana);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryStore::new();
        for name in ["a", "b", "c"] {
            store.create_directory(request(name, &[])).await.expect("create");
        }
        store.delete_directory(1).await.expect("delete");
        let created = store
            .create_directory(request("d", &[]))
            .await
            .expect("create");
        assert_eq!(created.id, 4);

        let page = store.list_directories(0, 10).await.expect("list");
        let ids: Vec<u64> = page.items.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn list_window_is_clipped_to_bounds() {
        let store = InMemoryStore::new();
        for index in 0..5 {
            store
                .create_directory(request(&format!("n{index}"), &[]))
                .await
                .expect("create");
        }
        let page = store.list_directories(3, 10).await.expect("tail");
        assert_eq!(page.count, 5);
        assert_eq!(page.items.len(), 2);

        let page = store.list_directories(10, 20).await.expect("past end");
        assert!(page.items.is_empty());
        assert_eq!(page.count, 5);

        let page = store
            .list_directories(usize::MAX, usize::MAX)
            .await
            .expect("saturated");
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn replace_patch_and_delete_report_missing_records() {
        let store = InMemoryStore::new();
        let err = store
            .replace_directory(9, request("x", &[]))
            .await
            .expect_err("replace missing");
        assert!(matches!(err, StoreError::NotFound(_)));
        let err = store
            .patch_directory(9, DirectoryPatchRequest::default())
            .await
            .expect_err("patch missing");
        assert!(matches!(err, StoreError::NotFound(_)));
        let err = store.delete_directory(9).await.expect_err("delete missing");
        assert!(matches!(err, StoreError::NotFound(_)));
        let err = store.get_directory(9).await.expect_err("get missing");
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn replace_and_patch_keep_the_id() {
        let store = InMemoryStore::new();
        let created = store
            .create_directory(request("Ana", &["a@x.com"]))
            .await
            .expect("create");

        let replaced = store
            .replace_directory(created.id, request("Bea", &["b@x.com"]))
            .await
            .expect("replace");
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.name, "Bea");

        let patched = store
            .patch_directory(
                created.id,
                DirectoryPatchRequest {
                    name: Some("Cleo".to_string()),
                    emails: None,
                },
            )
            .await
            .expect("patch");
        assert_eq!(patched.id, created.id);
        assert_eq!(patched.name, "Cleo");
        assert_eq!(patched.emails, vec!["b@x.com"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_unique_ids() {
        let store = InMemoryStore::new();
        let mut handles = Vec::new();
        for index in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create_directory(request(&format!("n{index}"), &[]))
                    .await
                    .expect("create")
                    .id
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("join"));
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 64);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&64));
    }

    #[tokio::test]
    async fn backend_identity() {
        let store = InMemoryStore::new();
        assert!(!store.is_durable());
        assert_eq!(store.backend_name(), "memory");
    }
}
