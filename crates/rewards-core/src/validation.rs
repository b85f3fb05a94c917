//! # Validation Module
//!
//! Turns an untrusted [`ReceiptDraft`] into a validated [`Receipt`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Check Order (first failure wins)                   │
//! │                                                                         │
//! │  1. Presence      retailer, date, time, ≥1 item, total all non-empty   │
//! │  2. Retailer      letters, digits, spaces, hyphens, ampersands only    │
//! │  3. Date          zero-padded YYYY-MM-DD, real calendar date           │
//! │  4. Time          zero-padded HH:MM, 24-hour clock                     │
//! │  5. Total         money format <integer>.<two digits>                  │
//! │  6. Items         per item, in order:                                  │
//! │     ├── trimmed description non-empty                                  │
//! │     ├── untrimmed description: letters, digits, spaces, hyphens        │
//! │     └── price in money format                                          │
//! │                                                                         │
//! │  The order decides WHICH error a multiply-broken receipt reports,      │
//! │  never WHETHER it is rejected.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rewards_core::types::ReceiptDraft;
//! use rewards_core::validation::validate;
//!
//! let draft = ReceiptDraft::default();
//! assert!(validate(draft).is_err()); // everything is missing
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Item, Receipt, ReceiptDraft};

// =============================================================================
// Receipt Validation
// =============================================================================

/// Validates a submitted receipt and parses it into its domain form.
///
/// Consumes the draft: on success every field has been checked and converted,
/// on failure the specific [`ValidationError`] is returned and nothing of the
/// draft survives. Pure function, safe under any concurrency.
pub fn validate(draft: ReceiptDraft) -> ValidationResult<Receipt> {
    if draft.retailer.is_empty()
        || draft.purchase_date.is_empty()
        || draft.purchase_time.is_empty()
        || draft.items.is_empty()
        || draft.total.is_empty()
    {
        return Err(ValidationError::MissingRequiredFields);
    }

    if !draft.retailer.chars().all(is_retailer_char) {
        return Err(ValidationError::InvalidRetailer(draft.retailer));
    }

    let purchase_date = parse_date(&draft.purchase_date)
        .ok_or(ValidationError::InvalidDate(draft.purchase_date))?;

    let purchase_time = parse_time(&draft.purchase_time)
        .ok_or(ValidationError::InvalidTime(draft.purchase_time))?;

    let total: Money = draft.total.parse().map_err(ValidationError::InvalidTotal)?;

    let mut items = Vec::with_capacity(draft.items.len());
    for (index, item) in draft.items.into_iter().enumerate() {
        // Blank check is on the trimmed text, charset check on the raw text:
        // surrounding whitespace is legal, interior control characters are not.
        if item.short_description.trim().is_empty() {
            return Err(ValidationError::InvalidItemDescription { index });
        }
        if !item.short_description.chars().all(is_description_char) {
            return Err(ValidationError::InvalidItemDescription { index });
        }

        let price: Money = item
            .price
            .parse()
            .map_err(|source| ValidationError::InvalidItemPrice { index, source })?;

        items.push(Item {
            short_description: item.short_description,
            price,
        });
    }

    Ok(Receipt {
        retailer: draft.retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

// =============================================================================
// Field Parsers
// =============================================================================

/// Parses a zero-padded `YYYY-MM-DD` calendar date.
///
/// The length check enforces zero padding: chrono's `%m`/`%d` happily accept
/// `2022-1-1`, which the wire format forbids.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parses a zero-padded 24-hour `HH:MM` time.
///
/// Same zero-padding rule as [`parse_date`]: `9:05` is rejected, `09:05`
/// is accepted.
fn parse_time(s: &str) -> Option<NaiveTime> {
    if s.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

// =============================================================================
// Character Classes
// =============================================================================

/// Characters allowed in a retailer name.
fn is_retailer_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '&'
}

/// Characters allowed in an item description. Note: no ampersand.
fn is_description_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '-'
}

// =============================================================================
// Unit Tests
// =============================================================================
