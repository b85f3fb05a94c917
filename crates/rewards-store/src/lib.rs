//! # rewards-store: In-Memory Receipt Storage
//!
//! Owns the service's only piece of shared mutable state: the map from
//! generated receipt ids to validated receipts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          rewards-store                                  │
//! │                                                                         │
//! │  apps/api handlers ──► ReceiptStore ──► RwLock<HashMap<id, Receipt>>   │
//! │                            │                                            │
//! │                            └── ids: UUID v4, generated on insert       │
//! │                                                                         │
//! │  rewards-core stays pure; ALL shared state lives behind this crate.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Contract
//!
//! - Concurrent `save` calls each return a distinct id; no write is lost
//! - Concurrent `get` calls proceed in parallel under the read lock
//! - No operation blocks indefinitely; everything completes synchronously

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::StoreError;
pub use store::ReceiptStore;
