//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Error Flow at the HTTP Boundary                   │
//! │                                                                         │
//! │  Internal (typed, logged)              Client (fixed, generic)         │
//! │  ────────────────────────              ────────────────────────        │
//! │                                                                         │
//! │  ValidationError::InvalidDate ──┐                                       │
//! │  ValidationError::InvalidTotal ─┼──► InvalidReceipt ──► 400            │
//! │  unparsable JSON body ──────────┘    {"error": "The receipt            │
//! │                                        is invalid."}                    │
//! │                                                                         │
//! │  StoreError::NotFound ─────────────► ReceiptNotFound ──► 404           │
//! │                                      {"error": "No receipt found       │
//! │                                        for that ID."}                   │
//! │                                                                         │
//! │  The WHICH-check-failed detail exists for logs and tests only;         │
//! │  the client always sees the same two messages.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use rewards_core::ValidationError;
use rewards_store::StoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Error returned from API handlers.
///
/// Exactly two client-visible shapes, per the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The submitted receipt failed validation or the body was not JSON.
    #[error("The receipt is invalid.")]
    InvalidReceipt,

    /// No receipt is stored under the requested id.
    #[error("No receipt found for that ID.")]
    ReceiptNotFound,
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidReceipt => StatusCode::BAD_REQUEST,
            ApiError::ReceiptNotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Converts validation failures to API errors.
///
/// The specific variant is logged here, then collapsed to the generic
/// client message.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        debug!(reason = %err, "receipt rejected");
        ApiError::InvalidReceipt
    }
}

/// Converts store lookup failures to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let StoreError::NotFound { id } = err;
        debug!(%id, "points requested for unknown receipt");
        ApiError::ReceiptNotFound
    }
}
