//! Error types for the category service.
//!
//! [`Error`] captures every failure a service call can report. Its
//! `From<Error> for Status` impl decides what the client sees:
//!
//! - Storage failures behind unary calls and the client-streaming create are
//!   all reported as `INTERNAL`, with the storage error's text appended to a
//!   short description of the failed step. Not-found is not distinguished.
//! - [`Error::Store`] is the raw storage error, used by the bidirectional
//!   stream. It maps to `UNKNOWN` with the bare storage message.
//! - [`Error::ServiceShutdown`] maps to `UNAVAILABLE`.

use category_store::StoreError;
use tonic::Status;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the category service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Persisting a new category failed.
    #[error("Error creating category: {0}")]
    Create(#[source] StoreError),

    /// The full scan of stored categories failed.
    #[error("Error listing categories: {0}")]
    List(#[source] StoreError),

    /// Looking up a single category failed, including when it does not exist.
    #[error("Error getting category: {0}")]
    Get(#[source] StoreError),

    /// Reading the next message from a client stream failed.
    #[error("Error receiving category: {}", .0.message())]
    Receive(Status),

    /// A storage failure propagated without interpretation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The service is in the process of shutting down.
    #[error("Service is shutting down")]
    ServiceShutdown,
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::Create(_) | Error::List(_) | Error::Get(_) | Error::Receive(_) => {
                Status::internal(err.to_string())
            }
            Error::Store(e) => Status::unknown(e.to_string()),
            Error::ServiceShutdown => Status::unavailable("Service is shutting down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn storage_failures_are_internal() {
        let cases = [
            (
                Error::Create(StoreError::unavailable("disk full")),
                "Error creating category: storage unavailable: disk full",
            ),
            (
                Error::List(StoreError::unavailable("timeout")),
                "Error listing categories: storage unavailable: timeout",
            ),
            (
                Error::Get(StoreError::not_found("abc")),
                "Error getting category: category abc not found",
            ),
        ];

        for (err, message) in cases {
            let status = Status::from(err);
            assert_eq!(status.code(), Code::Internal);
            assert_eq!(status.message(), message);
        }
    }

    #[test]
    fn receive_failure_keeps_only_the_inner_message() {
        let status = Status::from(Error::Receive(Status::data_loss("truncated frame")));
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "Error receiving category: truncated frame");
    }

    #[test]
    fn raw_store_error_is_unknown_without_prefix() {
        let status = Status::from(Error::from(StoreError::unavailable("gone")));
        assert_eq!(status.code(), Code::Unknown);
        assert_eq!(status.message(), "storage unavailable: gone");
    }

    #[test]
    fn shutdown_is_unavailable() {
        let status = Status::from(Error::ServiceShutdown);
        assert_eq!(status.code(), Code::Unavailable);
    }
}
