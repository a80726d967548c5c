//! A scriptable [`CategoryStore`] for exercising failure paths.

use category_tonic_core::{
    category_store::{Category, CategoryStore, MemoryStore, Result, StoreError},
    proto::CreateCategoryRequest,
};
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) fn request(name: &str, description: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Wraps a [`MemoryStore`], optionally failing the n-th create (0-based),
/// failing every full scan, or storing a different name than the one
/// requested.
#[derive(Default)]
pub(crate) struct ScriptedStore {
    inner: MemoryStore,
    creates: AtomicUsize,
    fail_create_at: Option<usize>,
    fail_find_all: bool,
    rename: bool,
}

impl ScriptedStore {
    pub(crate) fn failing_create_at(n: usize) -> Self {
        Self {
            fail_create_at: Some(n),
            ..Self::default()
        }
    }

    pub(crate) fn failing_find_all() -> Self {
        Self {
            fail_find_all: true,
            ..Self::default()
        }
    }

    pub(crate) fn renaming() -> Self {
        Self {
            rename: true,
            ..Self::default()
        }
    }

    pub(crate) fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

impl CategoryStore for ScriptedStore {
    async fn create(&self, name: String, description: String) -> Result<Category> {
        let call = self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_create_at == Some(call) {
            return Err(StoreError::unavailable("scripted failure"));
        }
        let name = if self.rename {
            format!("{name} (stored)")
        } else {
            name
        };
        self.inner.create(name, description).await
    }

    async fn find_all(&self) -> Result<Vec<Category>> {
        if self.fail_find_all {
            return Err(StoreError::unavailable("scripted scan failure"));
        }
        self.inner.find_all().await
    }

    async fn find(&self, id: &str) -> Result<Category> {
        self.inner.find(id).await
    }
}
