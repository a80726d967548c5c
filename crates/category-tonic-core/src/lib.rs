#![doc = include_str!("../README.md")]

mod common;
pub use common::*;
// Public re-export so downstream crates can reach the storage types via
// `category_tonic_core::category_store`
pub use category_store;
