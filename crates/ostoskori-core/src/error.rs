//! # Validation Error Types
//!
//! Typed errors for user-input validation.
//!
//! ## Error Philosophy
//! Parse errors are *recoverable by design*: the console flow catches them
//! and re-prompts with a localized message. Nothing in this module should
//! ever escalate past the prompt loop.

use thiserror::Error;

/// Errors from validating user-entered cart input.
///
/// These map one-to-one onto the localized error messages shown to the
/// user (`errInvalidCount`, `errInvalidPrice`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Item count did not parse as a positive base-10 integer.
    ///
    /// ## When This Occurs
    /// - Non-numeric input ("abc", "")
    /// - Zero or negative values ("-1", "0")
    /// - Fractional values ("3.5")
    #[error("invalid item count: '{input}'")]
    InvalidCount { input: String },

    /// Price did not parse as a non-negative number.
    ///
    /// ## When This Occurs
    /// - Non-numeric input
    /// - Negative values ("-2.50")
    #[error("invalid price: '{input}'")]
    InvalidPrice { input: String },
}

impl ValidationError {
    /// Creates an InvalidCount error from the offending input.
    pub fn invalid_count(input: impl Into<String>) -> Self {
        ValidationError::InvalidCount {
            input: input.into(),
        }
    }

    /// Creates an InvalidPrice error from the offending input.
    pub fn invalid_price(input: impl Into<String>) -> Self {
        ValidationError::InvalidPrice {
            input: input.into(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
