//! Types shared by the category server and its clients.
//!
//! - [`proto`] - Generated message types, service trait, and client.
//! - [`error`] - Service error type and its `tonic::Status` mapping.
//! - [`convert`] - Conversions between storage records and wire messages.

pub mod convert;
pub mod error;

pub use error::{Error, Result};

pub mod proto {
    tonic::include_proto!("category");
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("category_descriptor");
}
