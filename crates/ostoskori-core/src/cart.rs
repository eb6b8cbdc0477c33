//! # Cart Module
//!
//! Cart arithmetic and input parsing.
//!
//! ## The Whole Core, Honestly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Data Flow                                     │
//! │                                                                         │
//! │  "3"          ──► parse_count ──► 3                                     │
//! │  "1,99"       ──► parse_price ──► 1.99   (comma accepted as decimal)    │
//! │  "2.49"       ──► parse_price ──► 2.49                                  │
//! │                                                                         │
//! │  [1.99, 2.49, 3.50] ──► calculate_total ──► 7.98                        │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  CartResult { total: 7.98, language: "en", item_count: 3, .. }          │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  ostoskori-db::CartResultRepository::save_cart_result                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64 Prices?
//! Prices enter the system as free-text user input and leave it as REAL
//! columns; the store contract is floating point end to end. The sum is
//! accumulated strictly left-to-right so identical inputs always produce
//! bit-identical totals.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::i18n::Language;

// =============================================================================
// Pure Functions
// =============================================================================

/// Sums a sequence of prices.
///
/// ## Contract
/// - Returns `0.0` for an empty slice
/// - Accumulates strictly left-to-right: float addition is not associative,
///   so reordering would change low-order bits of the result
/// - No side effects
///
/// ## Example
/// ```rust
/// use ostoskori_core::cart::calculate_total;
///
/// assert_eq!(calculate_total(&[]), 0.0);
/// assert!((calculate_total(&[1.0, 2.5, 3.5]) - 7.0).abs() < 1e-4);
/// ```
pub fn calculate_total(prices: &[f64]) -> f64 {
    let mut sum = 0.0;
    for p in prices {
        sum += p;
    }
    sum
}

/// Checks whether `input` is a valid item count.
///
/// True iff the trimmed input parses as a base-10 integer strictly greater
/// than zero. Never panics.
///
/// ## Example
/// ```rust
/// use ostoskori_core::cart::is_valid_count;
///
/// assert!(is_valid_count("3"));
/// assert!(!is_valid_count("-1"));
/// assert!(!is_valid_count("abc"));
/// ```
pub fn is_valid_count(input: &str) -> bool {
    parse_count(input).is_ok()
}

/// Parses an item count, the typed variant behind [`is_valid_count`].
///
/// ## Rules
/// - Base-10 integer, strictly greater than zero
/// - No whitespace tolerance: padded input is rejected, like a strict
///   integer parser. The prompt layer trims what it reads before
///   validating, so interactive input still works with stray spaces.
///
/// The console flow re-prompts with `errInvalidCount` on `Err`.
pub fn parse_count(input: &str) -> ValidationResult<u32> {
    match input.parse::<i64>() {
        Ok(n) if n > 0 && n <= u32::MAX as i64 => Ok(n as u32),
        _ => Err(ValidationError::invalid_count(input)),
    }
}

/// Parses a price entered by the user.
///
/// ## Rules
/// - Leading/trailing whitespace is ignored
/// - A comma is accepted as the decimal separator ("1,99" == "1.99"),
///   matching European keyboard habits
/// - Must be a finite, non-negative number (zero is allowed: free items)
///
/// The console flow re-prompts with `errInvalidPrice` on `Err`.
///
/// ## Example
/// ```rust
/// use ostoskori_core::cart::parse_price;
///
/// assert_eq!(parse_price("2,49").unwrap(), 2.49);
/// assert!(parse_price("-1").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<f64> {
    let normalized = input.trim().replace(',', ".");

    match normalized.parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => Ok(p),
        _ => Err(ValidationError::invalid_price(input.trim())),
    }
}

// =============================================================================
// CartResult
// =============================================================================

/// Immutable snapshot of a finalized cart, ready for persistence.
///
/// ## Invariants (enforced by construction)
/// - `item_count == prices.len()` at the time of the snapshot
/// - `total == calculate_total(prices)` for the same slice
///
/// Construct via [`CartResult::from_prices`]; there is deliberately no way
/// to build one with mismatched fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartResult {
    /// Sum of all line prices.
    pub total: f64,

    /// Language code active when the cart was finalized (e.g. "en").
    pub language: String,

    /// Number of line items.
    pub item_count: u32,

    /// Optional customer identifier; `None` for anonymous carts.
    pub customer_id: Option<i64>,
}

impl CartResult {
    /// Builds a cart result from a finalized price list.
    ///
    /// The total and item count are derived from `prices`, never passed in,
    /// so the snapshot cannot disagree with its source data.
    pub fn from_prices(prices: &[f64], language: Language, customer_id: Option<i64>) -> Self {
        CartResult {
            total: calculate_total(prices),
            language: language.code().to_string(),
            item_count: prices.len() as u32,
            customer_id,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_total_empty() {
        assert_eq!(calculate_total(&[]), 0.0);
    }

    #[test]
    fn test_calculate_total() {
        let total = calculate_total(&[1.0, 2.5, 3.5]);
        assert!((total - 7.0).abs() < 1e-4);
    }

    #[test]
    fn test_calculate_total_single_item() {
        assert_eq!(calculate_total(&[4.20]), 4.20);
    }

    /// Identical inputs must always produce bit-identical totals.
    #[test]
    fn test_calculate_total_deterministic() {
        let prices = [0.1, 0.2, 0.3, 1e10, -1e10];
        assert_eq!(calculate_total(&prices), calculate_total(&prices));
    }

    /// The sum is a strict left-to-right fold. With this sequence the 1.0
    /// is absorbed into the large intermediate sum (ulp at 1e16 is 2.0),
    /// so sequential accumulation yields exactly 0.0, while summing the
    /// reversed sequence cancels the large terms first and keeps the 1.0.
    #[test]
    fn test_calculate_total_sums_left_to_right() {
        let prices = [1.0, 1e16, -1e16];
        assert_eq!(calculate_total(&prices), 0.0);

        let mut reversed = prices;
        reversed.reverse();
        assert_eq!(calculate_total(&reversed), 1.0);
    }

    #[test]
    fn test_valid_count() {
        assert!(is_valid_count("3"));
        assert!(!is_valid_count("-1"));
        assert!(!is_valid_count("0"));
        assert!(!is_valid_count("abc"));
        assert!(!is_valid_count(""));
        assert!(!is_valid_count("3.5"));
    }

    /// Counts are parsed strictly: padding is the prompt layer's job to
    /// strip, not the validator's to forgive.
    #[test]
    fn test_valid_count_rejects_padded_input() {
        assert!(!is_valid_count("  7  "));
        assert!(!is_valid_count("3 "));
        assert!(is_valid_count("7"));
    }

    #[test]
    fn test_parse_count_value() {
        assert_eq!(parse_count("12").unwrap(), 12);
        assert!(matches!(
            parse_count("nope"),
            Err(ValidationError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_parse_price_accepts_comma_decimal() {
        assert_eq!(parse_price("2,49").unwrap(), 2.49);
        assert_eq!(parse_price(" 1.99 ").unwrap(), 1.99);
    }

    #[test]
    fn test_parse_price_zero_allowed() {
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(parse_price("-2.50").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
    }

    #[test]
    fn test_cart_result_invariants() {
        let prices = [1.99, 2.49, 3.50];
        let result = CartResult::from_prices(&prices, Language::En, None);

        assert_eq!(result.item_count, 3);
        assert!((result.total - 7.98).abs() < 1e-4);
        assert_eq!(result.language, "en");
        assert_eq!(result.customer_id, None);
    }

    #[test]
    fn test_cart_result_empty_prices() {
        let result = CartResult::from_prices(&[], Language::Fr, Some(123));

        assert_eq!(result.item_count, 0);
        assert_eq!(result.total, 0.0);
        assert_eq!(result.language, "fr");
        assert_eq!(result.customer_id, Some(123));
    }
}
