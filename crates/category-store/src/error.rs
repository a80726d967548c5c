//! Errors surfaced by [`CategoryStore`](crate::CategoryStore)
//! implementations.

pub type Result<T, E = StoreError> = core::result::Result<T, E>;

/// All failures a storage backend can report.
///
/// Callers on the RPC side do not distinguish between variants; the variants
/// exist so backends and tests can describe what went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No category exists with the requested id.
    #[error("category {id} not found")]
    NotFound { id: String },

    /// The backend could not serve the request.
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
