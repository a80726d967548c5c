use crate::{Category, Result};
use core::future::Future;
use std::sync::Arc;

/// Async storage abstraction for [`Category`] records.
///
/// Implementations own persistence and id assignment. Every method may be
/// called concurrently from many tasks, hence the `Send + Sync` bound and the
/// `Send` futures.
pub trait CategoryStore: Send + Sync + 'static {
    /// Persists a new category and returns it with its assigned id.
    fn create(
        &self,
        name: String,
        description: String,
    ) -> impl Future<Output = Result<Category>> + Send;

    /// Returns every stored category.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Category>>> + Send;

    /// Looks up a single category by id.
    fn find(&self, id: &str) -> impl Future<Output = Result<Category>> + Send;
}

impl<S: CategoryStore> CategoryStore for Arc<S> {
    fn create(
        &self,
        name: String,
        description: String,
    ) -> impl Future<Output = Result<Category>> + Send {
        (**self).create(name, description)
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Category>>> + Send {
        (**self).find_all()
    }

    fn find(&self, id: &str) -> impl Future<Output = Result<Category>> + Send {
        (**self).find(id)
    }
}
