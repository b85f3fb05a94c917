//! # Store Error Types
//!
//! Error types for receipt storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in apps/api) ← Mapped to 404 with a fixed message           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Client sees {"error": "No receipt found for that ID."}                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Receipt storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No receipt is stored under the given id.
    ///
    /// ## When This Occurs
    /// - The id was never issued by this process
    /// - The process restarted (storage is in-memory only)
    #[error("no receipt found for id {id}")]
    NotFound { id: String },
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = StoreError::not_found("abc-123");
        assert_eq!(err.to_string(), "no receipt found for id abc-123");
    }
}
