//! # rewards-core: Pure Business Logic for the Receipt Rewards Service
//!
//! This crate is the **heart** of the service. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Rewards Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      HTTP Clients                               │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (Axum handlers)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rewards-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │validation │  │  points   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  checks   │  │  7 rules  │  │   │
//! │  │   │   Item    │  │  (cents)  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              rewards-store (In-Memory Storage)                  │   │
//! │  │              RwLock-guarded map, UUID per receipt               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ReceiptDraft, Receipt, Item)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Receipt validation
//! - [`points`] - The reward-points rule engine
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and shared state are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rewards_core::types::ReceiptDraft;
//! use rewards_core::{points, validation};
//!
//! let draft: ReceiptDraft = serde_json::from_str(
//!     r#"{
//!         "retailer": "Target",
//!         "purchaseDate": "2022-01-01",
//!         "purchaseTime": "13:01",
//!         "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
//!         "total": "6.49"
//!     }"#,
//! ).unwrap();
//!
//! let receipt = validation::validate(draft).unwrap();
//! let score = points::calculate(&receipt);
//! assert!(score >= 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rewards_core::Money` instead of
// `use rewards_core::money::Money`

pub use error::{MoneyFormatError, ValidationError};
pub use money::Money;
pub use types::{Item, ItemDraft, Receipt, ReceiptDraft};
