//! Server-side components of the category service.
//!
//! - [`config`] - CLI/environment configuration.
//! - [`service`] - The `CategoryService` implementation.
//! - [`streaming`] - Receive loops behind the two streaming RPCs.
//! - [`telemetry`] - Logging, tracing, and metrics setup.

pub mod config;
pub mod service;
pub mod streaming;
pub mod telemetry;
