//! # rewards-api: HTTP Surface for the Receipt Rewards Service
//!
//! Thin orchestration layer: routing, JSON extraction, error mapping, and
//! configuration. All business decisions live in `rewards-core`; all shared
//! state lives in `rewards-store`.
//!
//! Exposed as a library so integration tests can build the router and drive
//! it directly.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use routes::router;
