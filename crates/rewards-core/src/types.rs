//! # Domain Types
//!
//! Receipt data as it crosses the trust boundary.
//!
//! ## Two Shapes of a Receipt
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Untrusted vs. Validated                              │
//! │                                                                         │
//! │  HTTP body (JSON)                                                       │
//! │       │ serde                                                           │
//! │       ▼                                                                 │
//! │  ReceiptDraft ─── all strings, absent fields become empty values       │
//! │       │ validation::validate (crate::validation)                       │
//! │       ▼                                                                 │
//! │  Receipt ──────── parsed date/time, Money amounts, ≥ 1 item            │
//! │       │                                                                 │
//! │       ├──► rewards-store (kept as-is under a generated id)             │
//! │       └──► points::calculate                                           │
//! │                                                                         │
//! │  Nothing downstream of validation ever re-parses a string.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::money::Money;

// =============================================================================
// Wire DTOs (untrusted)
// =============================================================================

/// A receipt exactly as submitted, before any validation.
///
/// ## Design Notes
/// - Every scalar field is a `String`: format rules live in the validator,
///   not in serde.
/// - Container-level `default` makes absent JSON fields deserialize to empty
///   values, so "field missing" and "field empty" fail the same presence
///   check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptDraft {
    /// Retailer or store name, e.g. `"M&M Corner Market"`
    pub retailer: String,

    /// Purchase date, e.g. `"2022-03-20"`
    pub purchase_date: String,

    /// Purchase time (24h), e.g. `"14:33"`
    pub purchase_time: String,

    /// Purchased items, in submitted order
    pub items: Vec<ItemDraft>,

    /// Grand total, e.g. `"9.00"`
    pub total: String,
}

/// A single line item as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDraft {
    /// Short product description, e.g. `"Mountain Dew 12PK"`
    pub short_description: String,

    /// Item price, e.g. `"6.49"`
    pub price: String,
}

// =============================================================================
// Validated Domain Types
// =============================================================================

/// A validated, immutable receipt.
///
/// ## Invariants
/// - Only produced by `validation::validate`; every field passed its checks
/// - `items` is never empty
/// - `purchase_date` / `purchase_time` are plain calendar values, no zone
/// - Descriptions are stored untrimmed, exactly as submitted
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Retailer name (letters, digits, spaces, hyphens, ampersands)
    pub retailer: String,

    /// Calendar date of purchase
    pub purchase_date: NaiveDate,

    /// Time of day of purchase (minute precision)
    pub purchase_time: NaiveTime,

    /// Purchased items, at least one
    pub items: Vec<Item>,

    /// Grand total
    pub total: Money,
}

/// A validated line item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Short product description, untrimmed (the points rules trim it
    /// themselves)
    pub short_description: String,

    /// Item price
    pub price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_deserializes_camel_case() {
        let draft: ReceiptDraft = serde_json::from_str(
            r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
                "total": "6.49"
            }"#,
        )
        .unwrap();

        assert_eq!(draft.retailer, "Target");
        assert_eq!(draft.purchase_date, "2022-01-01");
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].short_description, "Mountain Dew 12PK");
    }

    #[test]
    fn test_absent_fields_become_empty() {
        let draft: ReceiptDraft = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();

        assert_eq!(draft.retailer, "Target");
        assert!(draft.purchase_date.is_empty());
        assert!(draft.purchase_time.is_empty());
        assert!(draft.items.is_empty());
        assert!(draft.total.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let draft: ReceiptDraft =
            serde_json::from_str(r#"{"retailer": "Target", "cashier": "Sam"}"#).unwrap();
        assert_eq!(draft.retailer, "Target");
    }
}
