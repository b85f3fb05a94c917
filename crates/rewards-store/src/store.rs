//! # Receipt Store
//!
//! The in-memory keyed container for accepted receipts.
//!
//! ## Thread Safety
//! The map is wrapped in `Arc<RwLock<T>>` because:
//! 1. Handlers for many simultaneous requests share one store
//! 2. Lookups vastly outnumber inserts, and readers may proceed in parallel
//! 3. An insert takes the write lock exclusively, so no id is ever lost
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Operations                                   │
//! │                                                                         │
//! │  HTTP Request             Store Call              State Change          │
//! │  ────────────             ──────────              ────────────          │
//! │                                                                         │
//! │  POST /receipts/process ─► save(receipt) ───────► map[new_uuid] = r    │
//! │                                                                         │
//! │  GET  /{id}/points ──────► get(id) ─────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Writes acquire the lock exclusively; reads acquire it shared    │
//! │        and release it before any response work happens.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rewards_core::Receipt;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreError;

/// Shared, concurrent-safe receipt storage.
///
/// ## Design Notes
/// - `Clone` is cheap and every clone shares the same underlying map, so a
///   store value is *injected* into each handler instead of living in a
///   process-wide global
/// - Receipts are immutable once stored; there is no update or delete
/// - Nothing survives a restart (intentionally: storage is a collaborator,
///   not a database)
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    receipts: Arc<RwLock<HashMap<String, Receipt>>>,
}

impl ReceiptStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        ReceiptStore {
            receipts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stores a validated receipt under a freshly generated id.
    ///
    /// ## ID Generation
    /// UUID v4: unique without coordination, opaque to the client. The id is
    /// generated before the lock is taken, so the critical section is just
    /// the map insert.
    pub fn save(&self, receipt: Receipt) -> String {
        let id = Uuid::new_v4().to_string();

        let mut receipts = self.receipts.write().expect("receipt map lock poisoned");
        receipts.insert(id.clone(), receipt);
        let stored = receipts.len();
        drop(receipts);

        debug!(%id, stored, "receipt stored");
        id
    }

    /// Retrieves a stored receipt by id.
    ///
    /// Returns a clone: the caller gets an owned receipt and the lock is
    /// released before any scoring work starts.
    pub fn get(&self, id: &str) -> Result<Receipt, StoreError> {
        let receipts = self.receipts.read().expect("receipt map lock poisoned");
        receipts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Returns the number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipts.read().expect("receipt map lock poisoned").len()
    }

    /// Checks whether the store holds no receipts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
