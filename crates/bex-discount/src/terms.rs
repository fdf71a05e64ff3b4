//! # Discount Terms
//!
//! The output record of a discount computation: the gross face sum, the
//! discount window, the annualized rate, the day count the window
//! resolved to, and the net proceeds. Produced transiently per quote and
//! attached to a sale, recourse demand, or mint request by the caller;
//! never persisted by this crate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bex_core::Sum;

/// Terms of a single discount quote.
///
/// `days` is the clamped calendar-day count actually used in the
/// computation (never negative). `net` is rounded toward zero to the
/// minor-unit precision of the gross currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTerms {
    /// Face sum being discounted.
    pub gross: Sum,
    /// Start of the discount window (typically the quote date).
    pub start_date: NaiveDate,
    /// End of the discount window (typically the bill's maturity).
    pub end_date: NaiveDate,
    /// Annualized discount rate, in percent.
    pub rate: Decimal,
    /// Calendar days the window resolved to, floored at zero.
    pub days: i64,
    /// Net proceeds after discount.
    pub net: Sum,
}

// ─── Tests ───────────────────────────────────────────────────────────
