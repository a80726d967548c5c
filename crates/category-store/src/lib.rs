#![doc = include_str!("../README.md")]

mod category;
mod error;
mod memory;
mod store;

pub use crate::category::*;
pub use crate::error::*;
pub use crate::memory::*;
pub use crate::store::*;
