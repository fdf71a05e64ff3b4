//! # Core Error Types
//!
//! Errors raised by foundational type construction. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Construction errors are recoverable by the caller: fix the input and
//! construct again. Nothing here is fatal.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when constructing foundational domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A node identifier was empty or all whitespace.
    #[error("node id must be a non-empty string")]
    EmptyNodeId,

    /// A bill identifier was empty or all whitespace.
    #[error("bill id must be a non-empty string")]
    EmptyBillId,

    /// A monetary sum was constructed with a negative amount.
    #[error("monetary sum cannot be negative: {amount}")]
    NegativeSum {
        /// The rejected amount.
        amount: Decimal,
    },

    /// Two sums with different currencies were combined.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency on the left-hand side.
        left: String,
        /// Currency on the right-hand side.
        right: String,
    },
}
