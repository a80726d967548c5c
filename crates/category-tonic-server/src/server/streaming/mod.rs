//! Receive loops behind the streaming RPCs.
//!
//! Both loops read requests strictly one at a time and finish creating
//! request N before reading request N+1. They are generic over the inbound
//! stream so they can be driven by `tonic::Streaming` in production and by
//! in-memory streams in tests.
//!
//! - [`collect`] - `CreateCategoryStream`: accumulate, reply once.
//! - [`echo`] - `CreateCategoryBiDiStream`: reply per request.

pub mod collect;
pub mod echo;

#[cfg(test)]
pub(crate) mod testing;
