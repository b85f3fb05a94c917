//! # Error Types
//!
//! Domain-specific error types for rewards-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rewards-core errors (this file)                                       │
//! │  ├── ValidationError   - Receipt validation failures                   │
//! │  └── MoneyFormatError  - Malformed money strings                       │
//! │                                                                         │
//! │  rewards-store errors (separate crate)                                 │
//! │  └── StoreError        - Receipt lookup failures                       │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError          - What the HTTP client sees                     │
//! │                                                                         │
//! │  Flow: MoneyFormatError → ValidationError → ApiError → HTTP response   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, offending value)
//! 3. Errors are enum variants, never String
//! 4. The HTTP layer collapses every variant to one generic client message;
//!    the variants exist for logging and tests

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation errors.
///
/// One variant per rejection reason. Checks run in a fixed order and the
/// first failure wins, so a receipt with several problems reports only the
/// earliest one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields is missing or empty.
    ///
    /// ## When This Occurs
    /// - Retailer, purchase date, purchase time, or total is empty
    /// - The items list is empty
    ///
    /// Absent JSON fields deserialize to empty values, so "missing" and
    /// "empty" are the same failure.
    #[error("missing required fields")]
    MissingRequiredFields,

    /// Retailer name contains a character outside the allowed set
    /// (letters, digits, spaces, hyphens, ampersands).
    #[error("retailer {0:?} contains invalid characters")]
    InvalidRetailer(String),

    /// Purchase date is not a zero-padded `YYYY-MM-DD` calendar date.
    #[error("invalid purchase date {0:?}")]
    InvalidDate(String),

    /// Purchase time is not a zero-padded 24-hour `HH:MM` time.
    #[error("invalid purchase time {0:?}")]
    InvalidTime(String),

    /// Total does not satisfy the money format.
    #[error("invalid total: {0}")]
    InvalidTotal(#[source] MoneyFormatError),

    /// An item description is blank or contains a character outside the
    /// allowed set (letters, digits, spaces, hyphens).
    #[error("invalid description for item {index}")]
    InvalidItemDescription { index: usize },

    /// An item price does not satisfy the money format.
    #[error("invalid price for item {index}: {source}")]
    InvalidItemPrice {
        index: usize,
        #[source]
        source: MoneyFormatError,
    },
}

// =============================================================================
// Money Format Error
// =============================================================================

/// Malformed money string errors.
///
/// The wire format is `<integer>.<exactly two digits>`. Each variant names
/// which part of that contract was broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyFormatError {
    /// The string does not split into exactly two parts on `.`.
    #[error("expected exactly one decimal separator")]
    MissingSeparator,

    /// The part before the separator is not an integer.
    #[error("invalid dollars amount")]
    InvalidDollars,

    /// The part after the separator is not exactly two digits.
    #[error("cents must be exactly two digits")]
    InvalidCents,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidRetailer("Tar!get".to_string());
        assert_eq!(err.to_string(), "retailer \"Tar!get\" contains invalid characters");

        let err = ValidationError::InvalidItemDescription { index: 2 };
        assert_eq!(err.to_string(), "invalid description for item 2");
    }

    #[test]
    fn test_money_error_converts_to_validation_error() {
        let err = ValidationError::InvalidTotal(MoneyFormatError::InvalidCents);
        assert_eq!(err.to_string(), "invalid total: cents must be exactly two digits");
    }
}
