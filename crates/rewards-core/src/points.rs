//! # Points Module
//!
//! The reward-points rule engine.
//!
//! ## Rule Summary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Scoring Rules (all apply, summed)                 │
//! │                                                                         │
//! │  1. Retailer      +1 per alphanumeric character in the name            │
//! │  2. Round dollar  +50 if the total has no fractional cents             │
//! │  3. Quarter       +25 if the total is a multiple of 25 cents           │
//! │  4. Item pairs    +5 per two items                                     │
//! │  5. Description   ceil(price × 0.2) per item whose trimmed             │
//! │                   description length is a positive multiple of 3       │
//! │  6. Odd day       +6 if the day-of-month is odd                        │
//! │  7. Afternoon     +10 if strictly between 14:00 and 16:00              │
//! │                                                                         │
//! │  Example: "Target", 2022-01-01 13:01, 5 items, total $35.35 → 28      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Notes
//! - Pure function over a validated [`Receipt`]: no state, no I/O, no
//!   re-parsing of strings
//! - All money arithmetic is integer cents (see [`crate::money`]); the
//!   round-dollar and quarter-multiple checks are integer modulo
//! - Deterministic: identical receipts always score identically

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::types::{Item, Receipt};

/// Points for a whole-dollar total.
const ROUND_DOLLAR_POINTS: i64 = 50;

/// Points for a total divisible by 25 cents.
const QUARTER_MULTIPLE_POINTS: i64 = 25;

/// Points per pair of items.
const ITEM_PAIR_POINTS: i64 = 5;

/// Points for an odd purchase day-of-month.
const ODD_DAY_POINTS: i64 = 6;

/// Points for a purchase inside the afternoon window.
const AFTERNOON_POINTS: i64 = 10;

/// The afternoon window, exclusive on both ends, in minutes since midnight.
const AFTERNOON_START_MINUTES: u32 = 14 * 60;
const AFTERNOON_END_MINUTES: u32 = 16 * 60;

// =============================================================================
// Calculator
// =============================================================================

/// Calculates the reward points for a validated receipt.
///
/// Each rule contributes independently; the score is their sum. Computed on
/// demand and never cached.
///
/// ## Example
/// ```rust
/// use rewards_core::types::ReceiptDraft;
/// use rewards_core::{points, validation};
///
/// let draft: ReceiptDraft = serde_json::from_str(
///     r#"{
///         "retailer": "ABC",
///         "purchaseDate": "2022-01-02",
///         "purchaseTime": "12:00",
///         "items": [{"shortDescription": "Item", "price": "10.00"}],
///         "total": "10.00"
///     }"#,
/// ).unwrap();
/// let receipt = validation::validate(draft).unwrap();
///
/// // 3 (retailer) + 50 (round dollar) + 25 (quarter multiple)
/// assert_eq!(points::calculate(&receipt), 78);
/// ```
pub fn calculate(receipt: &Receipt) -> i64 {
    retailer_points(&receipt.retailer)
        + round_dollar_points(receipt)
        + quarter_multiple_points(receipt)
        + item_pair_points(&receipt.items)
        + description_points(&receipt.items)
        + odd_day_points(receipt.purchase_date)
        + afternoon_points(receipt.purchase_time)
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1: one point per alphanumeric character in the retailer name.
///
/// Alphanumeric in the Unicode sense; spaces and punctuation (including the
/// `&` and `-` the validator allows) score nothing.
fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as i64
}

/// Rule 2: 50 points if the total is a round dollar amount.
fn round_dollar_points(receipt: &Receipt) -> i64 {
    if receipt.total.is_whole_dollars() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Rule 3: 25 points if the total is a multiple of 25 cents.
///
/// A round-dollar total is also a quarter multiple, so `"0.00"` collects
/// both this rule and rule 2.
fn quarter_multiple_points(receipt: &Receipt) -> i64 {
    if receipt.total.is_quarter_multiple() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// Rule 4: 5 points for every two items.
fn item_pair_points(items: &[Item]) -> i64 {
    (items.len() as i64 / 2) * ITEM_PAIR_POINTS
}

/// Rule 5: for each item whose trimmed description length is a positive
/// multiple of 3, 20% of the price rounded up to the next whole dollar.
fn description_points(items: &[Item]) -> i64 {
    items
        .iter()
        .map(|item| {
            let trimmed = item.short_description.trim();
            if !trimmed.is_empty() && trimmed.len() % 3 == 0 {
                item.price.fifth_rounded_up()
            } else {
                0
            }
        })
        .sum()
}

/// Rule 6: 6 points if the purchase day-of-month is odd.
///
/// Day-of-month of the plain calendar date; there is no time zone to shift
/// it across midnight.
fn odd_day_points(date: NaiveDate) -> i64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Rule 7: 10 points if the purchase time is strictly inside the afternoon
/// window. Exactly 14:00 or exactly 16:00 earns nothing.
fn afternoon_points(time: NaiveTime) -> i64 {
    let minutes = time.hour() * 60 + time.minute();
    if minutes > AFTERNOON_START_MINUTES && minutes < AFTERNOON_END_MINUTES {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemDraft, ReceiptDraft};
    use crate::validation::validate;

    /// Builds a validated receipt from wire-format strings.
    fn receipt(
        retailer: &str,
        date: &str,
        time: &str,
        items: &[(&str, &str)],
        total: &str,
    ) -> Receipt {
        validate(ReceiptDraft {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items: items
                .iter()
                .map(|(desc, price)| ItemDraft {
                    short_description: desc.to_string(),
                    price: price.to_string(),
                })
                .collect(),
            total: total.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_retailer_points() {
        assert_eq!(retailer_points("Target"), 6);
        assert_eq!(retailer_points("M&M Corner Market"), 14); // & and spaces score 0
        assert_eq!(retailer_points("7-11"), 3);
    }

    #[test]
    fn test_round_dollar_and_quarter_rules() {
        let round = receipt("ABC", "2022-01-02", "12:00", &[("Item", "9.00")], "9.00");
        assert_eq!(round_dollar_points(&round), 50);
        assert_eq!(quarter_multiple_points(&round), 25);

        let quarter = receipt("ABC", "2022-01-02", "12:00", &[("Item", "9.25")], "9.25");
        assert_eq!(round_dollar_points(&quarter), 0);
        assert_eq!(quarter_multiple_points(&quarter), 25);

        let neither = receipt("ABC", "2022-01-02", "12:00", &[("Item", "35.35")], "35.35");
        assert_eq!(round_dollar_points(&neither), 0);
        assert_eq!(quarter_multiple_points(&neither), 0);
    }

    #[test]
    fn test_zero_total_earns_both_total_rules() {
        let zero = receipt("ABC", "2022-01-02", "12:00", &[("Item", "0.00")], "0.00");
        assert_eq!(round_dollar_points(&zero) + quarter_multiple_points(&zero), 75);
    }

    #[test]
    fn test_item_pair_points() {
        let one = receipt("ABC", "2022-01-02", "12:00", &[("aa", "1.00")], "1.00");
        assert_eq!(item_pair_points(&one.items), 0);

        let items = [("aa", "1.00"), ("bb", "1.00"), ("cc", "1.00"), ("dd", "1.00"), ("ee", "1.00")];
        let five = receipt("ABC", "2022-01-02", "12:00", &items, "5.00");
        assert_eq!(item_pair_points(&five.items), 10); // 5 / 2 = 2 pairs
    }

    #[test]
    fn test_description_points_trims_before_measuring() {
        // "Emils Cheese Pizza" → 18 chars → ceil(12.25 × 0.2) = 3
        let hit = receipt("ABC", "2022-01-02", "12:00", &[("Emils Cheese Pizza", "12.25")], "12.25");
        assert_eq!(description_points(&hit.items), 3);

        // Trimmed "Klarbrunn 12-PK 12 FL OZ" → 24 chars → ceil(12.00 × 0.2) = 3
        let padded = receipt(
            "ABC",
            "2022-01-02",
            "12:00",
            &[("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")],
            "12.00",
        );
        assert_eq!(description_points(&padded.items), 3);

        // 17 chars, not a multiple of 3
        let miss = receipt("ABC", "2022-01-02", "12:00", &[("Mountain Dew 12PK", "6.49")], "6.49");
        assert_eq!(description_points(&miss.items), 0);
    }

    #[test]
    fn test_description_points_ceiling_boundary() {
        // Exactly 1.00 after the multiply stays 1; a hair over rounds to 2
        let exact = receipt("ABC", "2022-01-02", "12:00", &[("abc", "5.00")], "5.00");
        assert_eq!(description_points(&exact.items), 1);

        let over = receipt("ABC", "2022-01-02", "12:00", &[("abc", "5.01")], "5.01");
        assert_eq!(description_points(&over.items), 2);
    }

    #[test]
    fn test_odd_day_points() {
        let odd = receipt("ABC", "2022-01-01", "12:00", &[("aa", "1.00")], "1.00");
        assert_eq!(odd_day_points(odd.purchase_date), 6);

        let even = receipt("ABC", "2022-01-02", "12:00", &[("aa", "1.00")], "1.00");
        assert_eq!(odd_day_points(even.purchase_date), 0);
    }

    #[test]
    fn test_afternoon_window_is_exclusive() {
        let cases = [
            ("13:59", 0),
            ("14:00", 0), // boundary: exactly 14:00 does not qualify
            ("14:01", 10),
            ("14:33", 10),
            ("15:59", 10),
            ("16:00", 0), // boundary: exactly 16:00 does not qualify
            ("16:01", 0),
        ];
        for (time, expected) in cases {
            let r = receipt("ABC", "2022-01-02", time, &[("aa", "1.00")], "1.00");
            assert_eq!(afternoon_points(r.purchase_time), expected, "at {time}");
        }
    }

    #[test]
    fn test_scenario_target() {
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        );
        // 6 retailer + 10 pairs + 3 + 3 descriptions + 6 odd day
        assert_eq!(calculate(&r), 28);
    }

    #[test]
    fn test_scenario_corner_market() {
        let r = receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            &[
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
            ],
            "9.00",
        );
        // 14 retailer + 50 round + 25 quarter + 10 pairs + 10 afternoon
        assert_eq!(calculate(&r), 109);
    }

    #[test]
    fn test_scenario_single_item() {
        let r = receipt("ABC", "2022-01-02", "12:00", &[("Item", "10.00")], "10.00");
        // 3 retailer + 50 round + 25 quarter
        assert_eq!(calculate(&r), 78);
    }

    #[test]
    fn test_deterministic() {
        let r = receipt("Target", "2022-01-01", "13:01", &[("Item", "1.00")], "35.35");
        let first = calculate(&r);
        for _ in 0..10 {
            assert_eq!(calculate(&r), first);
        }
    }

    #[test]
    fn test_score_is_non_negative() {
        // Weakest possible receipt: no scoring characters, even day,
        // morning purchase, one item that misses the description rule.
        let r = receipt("&", "2022-01-02", "12:00", &[("aa", "0.01")], "0.01");
        assert!(calculate(&r) >= 0);
        assert_eq!(calculate(&r), 0);
    }
}
