//! # Routes and Handlers
//!
//! Wires HTTP verbs and paths to the validator, store, and calculator.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Request Flow                                   │
//! │                                                                         │
//! │  POST /receipts/process                                                 │
//! │    body JSON ──► ReceiptDraft ──► validate ──► store.save ──► {"id"}   │
//! │                        │               │                                │
//! │                        └── bad JSON ───┴── 400 invalid receipt          │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                              │
//! │    path id ──► store.get ──► points::calculate ──► {"points"}          │
//! │                    │                                                    │
//! │                    └── unknown id ──► 404 not found                     │
//! │                                                                         │
//! │  Wrong verb on either path → 405 (axum method routing)                  │
//! │  Unknown path              → 404 (router fallback)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The receipt id arrives as a typed `Path<String>` parameter, never smuggled
//! through request extensions.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use rewards_core::types::ReceiptDraft;
use rewards_core::{points, validation};
use rewards_store::ReceiptStore;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::error::ApiError;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state, cloned per handler invocation.
///
/// The store handle is injected here at router construction; cloning it
/// shares the one underlying map.
#[derive(Clone)]
pub struct AppState {
    store: ReceiptStore,
}

// =============================================================================
// Response DTOs
// =============================================================================

/// Response to a successful receipt submission.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: String,
}

/// Response to a successful points lookup.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// Health probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the API router over an injected store.
///
/// Integration tests call this directly and drive the router without a
/// TCP socket.
pub fn router(store: ReceiptStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(receipt_points))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /receipts/process` - Validate and store a submitted receipt.
///
/// The body is taken as `Result<Json, JsonRejection>` so an unparsable body
/// lands in the same 400 as a validation failure instead of axum's default
/// 422.
async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Json<ReceiptDraft>, JsonRejection>,
) -> Result<Json<IdResponse>, ApiError> {
    let Json(draft) = body.map_err(|err| {
        debug!(reason = %err, "unparsable receipt body");
        ApiError::InvalidReceipt
    })?;

    let receipt = validation::validate(draft)?;
    info!(retailer = %receipt.retailer, total = %receipt.total, "receipt accepted");

    let id = state.store.save(receipt);
    Ok(Json(IdResponse { id }))
}

/// `GET /receipts/{id}/points` - Score a stored receipt.
///
/// Points are computed on demand and never cached; the calculation is pure
/// and cheap.
async fn receipt_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let receipt = state.store.get(&id)?;
    let points = points::calculate(&receipt);
    debug!(%id, points, "points calculated");

    Ok(Json(PointsResponse { points }))
}

/// `GET /health` - Liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
