//! In-memory [`CategoryStore`] backed by a read/write lock.

use crate::{Category, CategoryStore, Result, StoreError};
use ferroid::id::ULID;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Thread-safe, process-local category storage.
///
/// Ids are [`ULID`]s rendered in Crockford Base32, so they are unique and
/// sort by creation time. [`CategoryStore::find_all`] returns records in the
/// order they were created.
///
/// Cloning is cheap and every clone shares the same records.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Records>>,
}

#[derive(Debug, Default)]
struct Records {
    ordered: Vec<Category>,
    by_id: HashMap<String, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored categories.
    pub fn len(&self) -> usize {
        self.records.read().ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, name: String, description: String) -> Category {
        let mut records = self.records.write();
        // Fresh random bits per call make a collision practically impossible,
        // but the index must never point at the wrong record.
        let id = loop {
            let candidate = ULID::now().to_string();
            if !records.by_id.contains_key(&candidate) {
                break candidate;
            }
        };

        let category = Category {
            id,
            name,
            description,
        };
        let position = records.ordered.len();
        records.by_id.insert(category.id.clone(), position);
        records.ordered.push(category.clone());
        category
    }
}

impl CategoryStore for MemoryStore {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    async fn create(&self, name: String, description: String) -> Result<Category> {
        let category = self.insert(name, description);
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %category.id, "stored category");
        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>> {
        Ok(self.records.read().ordered.clone())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    async fn find(&self, id: &str) -> Result<Category> {
        let records = self.records.read();
        records
            .by_id
            .get(id)
            .map(|&position| records.ordered[position].clone())
            .ok_or_else(|| StoreError::not_found(id))
    }
}
