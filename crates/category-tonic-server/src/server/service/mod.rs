//! gRPC service implementation.
//!
//! - [`handler`] - [`CategoryHandler`], the `CategoryService` entry point.

pub mod handler;

pub use handler::CategoryHandler;

use category_tonic_core::{
    category_store::CategoryStore, proto::category_service_server::CategoryServiceServer,
};
use tonic::codec::CompressionEncoding;

/// Wraps `handler` in the generated tonic server, accepting and sending every
/// supported compression encoding.
pub fn build_category_service<S: CategoryStore>(
    handler: CategoryHandler<S>,
) -> CategoryServiceServer<CategoryHandler<S>> {
    CategoryServiceServer::new(handler)
        .send_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Deflate)
        .accept_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Gzip)
        .accept_compressed(CompressionEncoding::Deflate)
}
