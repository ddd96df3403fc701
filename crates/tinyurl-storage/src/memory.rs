use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};
use tinyurl_core::repository::{ReadRepository, Repository, Result};
use tinyurl_core::{ShortCode, Snapshot, StorageError, UrlMapping};

/// In-memory storage slot for a URL mapping.
///
/// Everything but the visit counter is immutable after insertion, so resolves
/// only need the shard read lock.
#[derive(Debug)]
struct Slot {
    short_code: ShortCode,
    long_url: String,
    created_at: Timestamp,
    visits: AtomicU64,
}

impl Slot {
    fn from_mapping(mapping: UrlMapping) -> Self {
        Self {
            short_code: mapping.short_code,
            long_url: mapping.long_url,
            created_at: mapping.created_at,
            visits: AtomicU64::new(mapping.visit_count),
        }
    }

    fn to_mapping_with(&self, visit_count: u64) -> UrlMapping {
        UrlMapping {
            short_code: self.short_code.clone(),
            long_url: self.long_url.clone(),
            visit_count,
            created_at: self.created_at,
        }
    }

    fn to_mapping(&self) -> UrlMapping {
        self.to_mapping_with(self.visits.load(Ordering::Acquire))
    }
}

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap shards its table behind independent locks, so operations on codes
/// in different shards never contend. Inserts use the entry API so the
/// existence check and the write happen under one shard lock.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, Slot>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of live mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &str) -> Result<Option<UrlMapping>> {
        Ok(self.storage.get(code).map(|slot| slot.to_mapping()))
    }

    async fn exists(&self, code: &str) -> Result<bool> {
        Ok(self.storage.contains_key(code))
    }

    async fn snapshot(&self) -> Result<Snapshot> {
        Ok(self
            .storage
            .iter()
            .map(|slot| (slot.short_code.clone(), slot.to_mapping()))
            .collect())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, mapping: UrlMapping) -> Result<()> {
        match self.storage.entry(mapping.short_code.as_str().to_owned()) {
            Entry::Occupied(occupied) => Err(StorageError::Conflict(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(Slot::from_mapping(mapping));
                Ok(())
            }
        }
    }

    async fn record_visit(&self, code: &str) -> Result<Option<UrlMapping>> {
        // The read guard keeps `delete` out until the increment has landed.
        Ok(self.storage.get(code).map(|slot| {
            let visits = slot.visits.fetch_add(1, Ordering::AcqRel) + 1;
            slot.to_mapping_with(visits)
        }))
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        Ok(self.storage.remove(code).is_some())
    }
}
