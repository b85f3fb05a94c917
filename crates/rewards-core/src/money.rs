//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The points rules test divisibility of a total by 25 cents.            │
//! │  With floats that becomes `total*100 mod 25 == 0`, which can           │
//! │  misclassify any total whose fraction (like .10) has no exact          │
//! │  binary representation.                                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" parses to 3535 cents. Divisibility and whole-dollar         │
//! │    checks are plain integer modulo with no representation error.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rewards_core::money::Money;
//!
//! // Parse from the wire format (the only path from untrusted input)
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(35.35); // NO SUCH METHOD EXISTS!
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::MoneyFormatError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: The wire format admits a signed dollars part
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No float constructor**: values enter via `from_cents` or parsing
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "35.35" (wire) ──► validation ──► Receipt.total ──► points rules      │
/// │                                    Item.price    ──► description bonus │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is an exact whole-dollar amount.
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// assert!(Money::from_cents(900).is_whole_dollars());  // $9.00
    /// assert!(!Money::from_cents(3535).is_whole_dollars()); // $35.35
    /// ```
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Checks if the value is an exact multiple of 25 cents.
    ///
    /// Integer modulo on cents: a float rendition of this check
    /// (`total * 100 mod 25`) can misclassify values whose decimal
    /// fraction has no exact binary representation.
    #[inline]
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }

    /// One fifth of the value, rounded up to the next whole dollar.
    ///
    /// ## Implementation
    /// `ceil(cents / 500)` as integer arithmetic: `(cents + 499)` floor-divided
    /// by 500. `div_euclid` keeps the floor semantics for negative values, so
    /// the result matches the mathematical ceiling for any sign.
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(500).fifth_rounded_up(), 1);  // $5.00 → 1
    /// assert_eq!(Money::from_cents(501).fifth_rounded_up(), 2);  // $5.01 → 2
    /// assert_eq!(Money::from_cents(1225).fifth_rounded_up(), 3); // $12.25 → 3
    /// ```
    #[inline]
    pub const fn fifth_rounded_up(&self) -> i64 {
        (self.0 + 499).div_euclid(500)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses the wire money format: `<integer>.<exactly two digits>`.
///
/// ## Accepted / Rejected
/// ```text
/// "10.00"  → 1000 cents      "10"     → MissingSeparator
/// "09.99"  → 999 cents       "10.0"   → InvalidCents
/// "-5.50"  → -550 cents      "10.000" → InvalidCents
/// "0.00"   → 0 cents         "abc.de" → InvalidDollars
/// ```
///
/// Leading zeros in the dollars part are accepted; the cents part must be
/// exactly two characters and non-negative.
impl FromStr for Money {
    type Err = MoneyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dollars, cents) = s.split_once('.').ok_or(MoneyFormatError::MissingSeparator)?;
        if cents.contains('.') {
            // More than one separator ("10.00.00")
            return Err(MoneyFormatError::MissingSeparator);
        }

        let major: i64 = dollars.parse().map_err(|_| MoneyFormatError::InvalidDollars)?;

        if cents.len() != 2 {
            return Err(MoneyFormatError::InvalidCents);
        }
        let minor = i64::from(cents.parse::<u8>().map_err(|_| MoneyFormatError::InvalidCents)?);

        // The sign lives on the string, not the parsed major unit: "-0.50"
        // has major == 0 but is still negative.
        let magnitude = major.abs() * 100 + minor;
        if dollars.starts_with('-') {
            Ok(Money(-magnitude))
        } else {
            Ok(Money(magnitude))
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging, not for the wire: responses never echo
/// money values back to the client.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!("10.00".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("35.35".parse::<Money>().unwrap().cents(), 3535);
        assert_eq!("0.00".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("09.99".parse::<Money>().unwrap().cents(), 999); // leading zero ok
        assert_eq!("1.26".parse::<Money>().unwrap().cents(), 126);
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
        assert_eq!("-0.50".parse::<Money>().unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert_eq!("10".parse::<Money>(), Err(MoneyFormatError::MissingSeparator));
        assert_eq!("".parse::<Money>(), Err(MoneyFormatError::MissingSeparator));
        assert_eq!("10.00.00".parse::<Money>(), Err(MoneyFormatError::MissingSeparator));
    }

    #[test]
    fn test_parse_rejects_bad_dollars() {
        assert_eq!("abc.de".parse::<Money>(), Err(MoneyFormatError::InvalidDollars));
        assert_eq!(".99".parse::<Money>(), Err(MoneyFormatError::InvalidDollars));
    }

    #[test]
    fn test_parse_rejects_bad_cents() {
        assert_eq!("10.0".parse::<Money>(), Err(MoneyFormatError::InvalidCents));
        assert_eq!("10.000".parse::<Money>(), Err(MoneyFormatError::InvalidCents));
        assert_eq!("10.".parse::<Money>(), Err(MoneyFormatError::InvalidCents));
        assert_eq!("10.x9".parse::<Money>(), Err(MoneyFormatError::InvalidCents));
        assert_eq!("10.-1".parse::<Money>(), Err(MoneyFormatError::InvalidCents));
    }

    #[test]
    fn test_accessors() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_whole_dollars() {
        assert!(Money::from_cents(0).is_whole_dollars());
        assert!(Money::from_cents(900).is_whole_dollars());
        assert!(!Money::from_cents(901).is_whole_dollars());
    }

    #[test]
    fn test_quarter_multiple() {
        assert!(Money::from_cents(0).is_quarter_multiple());
        assert!(Money::from_cents(225).is_quarter_multiple());
        assert!(Money::from_cents(900).is_quarter_multiple());
        assert!(!Money::from_cents(3535).is_quarter_multiple());
    }

    #[test]
    fn test_fifth_rounded_up() {
        // Exactly $5.00 → 1.00 → stays 1; a cent over rounds to 2
        assert_eq!(Money::from_cents(500).fifth_rounded_up(), 1);
        assert_eq!(Money::from_cents(501).fifth_rounded_up(), 2);
        // Scenario prices
        assert_eq!(Money::from_cents(1225).fifth_rounded_up(), 3); // ceil(2.45)
        assert_eq!(Money::from_cents(1200).fifth_rounded_up(), 3); // ceil(2.40)
        // Negative values use the mathematical ceiling, not truncation
        assert_eq!(Money::from_cents(-100).fifth_rounded_up(), 0); // ceil(-0.20)
        assert_eq!(Money::from_cents(-2600).fifth_rounded_up(), -5); // ceil(-5.20)
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }
}
