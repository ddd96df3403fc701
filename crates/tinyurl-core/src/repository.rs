use crate::error::StorageError;
use crate::mapping::{Snapshot, UrlMapping};
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves a copy of the mapping for a given short code without
    /// touching its visit count. Returns `None` if the code does not exist.
    async fn get(&self, code: &str) -> Result<Option<UrlMapping>>;

    /// Checks whether a short code currently exists in the repository.
    async fn exists(&self, code: &str) -> Result<bool>;

    /// Copies every live mapping. Later mutations never show up in the
    /// returned snapshot.
    async fn snapshot(&self) -> Result<Snapshot>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new mapping if its short code is free.
    /// Returns `Err(Conflict)` and leaves the table untouched otherwise.
    async fn insert(&self, mapping: UrlMapping) -> Result<()>;

    /// Atomically increments the visit count of a mapping and returns a copy
    /// reflecting the increment. Returns `None` if the code does not exist.
    async fn record_visit(&self, code: &str) -> Result<Option<UrlMapping>>;

    /// Deletes the mapping for a given short code.
    /// Returns `true` if the mapping existed and was removed.
    async fn delete(&self, code: &str) -> Result<bool>;
}
