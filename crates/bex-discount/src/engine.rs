//! # Discount Computation
//!
//! Commercial (banker's) discounting on an actual/360 basis:
//!
//! ```text
//! days     = max(0, days_between(start, end))
//! discount = gross * (rate / 100) * (days / 360)
//! net      = gross - discount
//! ```
//!
//! All arithmetic is exact decimal. The two divisions are fused into a
//! single division by 36000 so rounding error cannot accumulate across
//! intermediate steps; the only rounding applied is the final rounding
//! of `net` toward zero at the currency's minor-unit precision.
//!
//! The discount is capped at the gross sum: a rate and window large
//! enough to exceed the face value yield zero proceeds, never a
//! negative sum. Computation is one-directional; there is no solver
//! recovering a rate from desired proceeds.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use bex_core::{days_between, CoreError, Sum};

use crate::terms::DiscountTerms;

/// Denominator fusing the percent and day-basis divisions: 100 * 360.
const BASIS_DENOMINATOR: Decimal = Decimal::from_parts(36000, 0, 0, false, 0);

/// Errors raised by discount computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscountError {
    /// The gross sum was zero or negative.
    #[error("invalid discount input: gross sum must be positive, got {amount}")]
    NonPositiveGross {
        /// The rejected gross amount.
        amount: Decimal,
    },

    /// The annualized rate was negative.
    #[error("invalid discount input: rate cannot be negative, got {rate}")]
    NegativeRate {
        /// The rejected rate, in percent.
        rate: Decimal,
    },

    /// Sum arithmetic failed.
    #[error("sum arithmetic failed: {0}")]
    Sum(#[from] CoreError),
}

/// Compute discount terms for a gross sum over a date window.
///
/// `annual_rate_percent` is the annualized discount rate in percent
/// (`4` means 4% per 360-day year). A reversed window clamps to zero
/// days, so `net == gross` and the quote is still well-formed.
///
/// # Errors
///
/// Returns [`DiscountError::NonPositiveGross`] if the gross amount is
/// zero or negative, and [`DiscountError::NegativeRate`] if the rate is
/// negative. Inputs are validated before any arithmetic runs.
pub fn compute_discount(
    gross: Sum,
    start_date: NaiveDate,
    end_date: NaiveDate,
    annual_rate_percent: Decimal,
) -> Result<DiscountTerms, DiscountError> {
    if gross.amount() <= Decimal::ZERO {
        return Err(DiscountError::NonPositiveGross {
            amount: gross.amount(),
        });
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(DiscountError::NegativeRate {
            rate: annual_rate_percent,
        });
    }

    let days = days_between(start_date, end_date).max(0);

    let discount_amount =
        gross.amount() * annual_rate_percent * Decimal::from(days) / BASIS_DENOMINATOR;
    let discount = gross.with_amount(discount_amount)?;
    let net = gross.saturating_sub(&discount)?.round_to_minor_units();

    Ok(DiscountTerms {
        gross,
        start_date,
        end_date,
        rate: annual_rate_percent,
        days,
        net,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bex_core::Currency;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn sat(amount: Decimal) -> Sum {
        Sum::new(amount, Currency::Sat).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── Concrete quotes ──────────────────────────────────────────────

    #[test]
    fn test_ninety_days_at_four_percent() {
        // 1000 * 0.04 * 90/360 = 10 discount.
        let terms = compute_discount(
            sat(dec!(1000)),
            date(2021, 1, 1),
            date(2021, 4, 1),
            dec!(4),
        )
        .unwrap();
        assert_eq!(terms.days, 90);
        assert_eq!(terms.net.amount(), dec!(990));
    }

    #[test]
    fn test_zero_day_window_is_identity() {
        let terms = compute_discount(
            sat(dec!(1000)),
            date(2021, 6, 1),
            date(2021, 6, 1),
            dec!(7.5),
        )
        .unwrap();
        assert_eq!(terms.days, 0);
        assert_eq!(terms.net, terms.gross);
    }

    #[test]
    fn test_reversed_window_clamps_to_zero_days() {
        let terms = compute_discount(
            sat(dec!(1000)),
            date(2021, 4, 1),
            date(2021, 1, 1),
            dec!(4),
        )
        .unwrap();
        assert_eq!(terms.days, 0);
        assert_eq!(terms.net, terms.gross);
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let terms = compute_discount(
            sat(dec!(1000)),
            date(2021, 1, 1),
            date(2021, 4, 1),
            dec!(0),
        )
        .unwrap();
        assert_eq!(terms.net.amount(), dec!(1000));
    }

    #[test]
    fn test_net_rounds_toward_zero_at_minor_units() {
        // 1000 * 3.6 * 1 / 36000 = 0.1, net 999.9, floored to 999 sat.
        let terms = compute_discount(
            sat(dec!(1000)),
            date(2021, 1, 1),
            date(2021, 1, 2),
            dec!(3.6),
        )
        .unwrap();
        assert_eq!(terms.days, 1);
        assert_eq!(terms.net.amount(), dec!(999));
    }

    #[test]
    fn test_btc_keeps_eight_minor_units() {
        let gross = Sum::new(dec!(1), Currency::Btc).unwrap();
        // 1 * 3.6 * 1 / 36000 = 0.0001 discount.
        let terms =
            compute_discount(gross, date(2021, 1, 1), date(2021, 1, 2), dec!(3.6)).unwrap();
        assert_eq!(terms.net.amount(), dec!(0.9999));
    }

    #[test]
    fn test_discount_capped_at_gross() {
        // 500% over a full 360-day basis year discounts 5x the face.
        let terms = compute_discount(
            sat(dec!(1000)),
            date(2021, 1, 1),
            date(2021, 12, 27),
            dec!(500),
        )
        .unwrap();
        assert_eq!(terms.days, 360);
        assert!(terms.net.is_zero());
    }

    // ── Input validation ─────────────────────────────────────────────

    #[test]
    fn test_zero_gross_rejected() {
        let result = compute_discount(
            Sum::zero(Currency::Sat),
            date(2021, 1, 1),
            date(2021, 4, 1),
            dec!(4),
        );
        assert!(matches!(
            result,
            Err(DiscountError::NonPositiveGross { .. })
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = compute_discount(
            sat(dec!(1000)),
            date(2021, 1, 1),
            date(2021, 4, 1),
            dec!(-0.01),
        );
        assert!(matches!(result, Err(DiscountError::NegativeRate { .. })));
    }

    // ── Properties ───────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_net_never_exceeds_gross(
            gross in 1u64..=10_000_000,
            days_offset in 0i64..=720,
            rate_bps in 0u32..=2_000,
        ) {
            let gross = sat(Decimal::from(gross));
            let start = date(2021, 1, 1);
            let end = start + chrono::Duration::days(days_offset);
            let rate = Decimal::from(rate_bps) / dec!(100);
            let terms = compute_discount(gross, start, end, rate).unwrap();
            prop_assert!(terms.net.amount() <= terms.gross.amount());
            prop_assert!(terms.net.amount() >= Decimal::ZERO);
        }

        #[test]
        fn prop_net_monotonically_falls_with_rate(
            gross in 1u64..=10_000_000,
            rate_bps in 0u32..=2_000,
        ) {
            let gross = sat(Decimal::from(gross));
            let start = date(2021, 1, 1);
            let end = date(2021, 4, 1);
            let lower = Decimal::from(rate_bps) / dec!(100);
            let higher = lower + dec!(0.25);
            let at_lower = compute_discount(gross, start, end, lower).unwrap();
            let at_higher = compute_discount(gross, start, end, higher).unwrap();
            prop_assert!(at_higher.net.amount() <= at_lower.net.amount());
        }
    }
}
