//! # `category-tonic-server`
//!
//! gRPC service over a single `Category` entity, built on [`tonic`].
//!
//! ## RPCs
//! - `CreateCategory`, `ListCategories`, `GetCategory` - unary calls mapped
//!   one-to-one onto the [`CategoryStore`] operations.
//! - `CreateCategoryStream` - client streaming; creates each request and
//!   replies once with every created category.
//! - `CreateCategoryBiDiStream` - bidirectional; replies to each request as
//!   soon as it is created.
//!
//! The service itself is stateless: it holds a shared handle to a
//! [`CategoryStore`], immutable configuration, and a shutdown token.
//!
//! [`CategoryStore`]: category_tonic_core::category_store::CategoryStore

pub mod server;
