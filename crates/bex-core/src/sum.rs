//! # Monetary Sums
//!
//! Exact-decimal monetary amounts tagged with their currency. All bill
//! arithmetic flows through [`rust_decimal::Decimal`]; binary floating
//! point never touches money in this workspace.
//!
//! ## Wire Shape
//!
//! Amounts serialize as decimal strings (`"1000"`, not `1000.0`) so JSON
//! round-trips cannot introduce float damage.
//!
//! ## Minor Units
//!
//! Each [`Currency`] declares its minor-unit precision. Satoshi sums are
//! integral (zero decimal places); proceeds computed from fractional
//! arithmetic are rounded toward zero to that precision, so a payout is
//! never overstated by rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The currency a sum is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// Satoshi. The atomic unit; no further subdivision.
    Sat,
    /// Bitcoin. Eight minor-unit decimal places.
    Btc,
}

impl Currency {
    /// Number of minor-unit decimal places for this currency.
    pub fn minor_units(&self) -> u32 {
        match self {
            Self::Sat => 0,
            Self::Btc => 8,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sat => "sat",
            Self::Btc => "btc",
        };
        f.write_str(s)
    }
}

/// A non-negative monetary amount in a specific currency.
///
/// Negative sums are rejected at construction and at deserialization;
/// bill faces, discounts, and proceeds are all magnitudes. Subtraction
/// that would go below zero saturates instead, see
/// [`Sum::saturating_sub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sum {
    amount: Decimal,
    currency: Currency,
}

impl<'de> Deserialize<'de> for Sum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SumWire {
            amount: Decimal,
            currency: Currency,
        }
        let wire = SumWire::deserialize(deserializer)?;
        Sum::new(wire.amount, wire.currency).map_err(serde::de::Error::custom)
    }
}

impl Sum {
    /// Create a sum, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NegativeSum`] if `amount` is negative.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, CoreError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CoreError::NegativeSum { amount });
        }
        Ok(Self { amount, currency })
    }

    /// The zero sum in `currency`.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The decimal amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of denomination.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Whether the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Rebuild a sum in the same currency from a new amount.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NegativeSum`] if `amount` is negative.
    pub fn with_amount(&self, amount: Decimal) -> Result<Self, CoreError> {
        Self::new(amount, self.currency)
    }

    /// Subtract `other`, saturating at zero.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CurrencyMismatch`] if the currencies differ.
    pub fn saturating_sub(&self, other: &Sum) -> Result<Self, CoreError> {
        if self.currency != other.currency {
            return Err(CoreError::CurrencyMismatch {
                left: self.currency.to_string(),
                right: other.currency.to_string(),
            });
        }
        let amount = (self.amount - other.amount).max(Decimal::ZERO);
        Ok(Self {
            amount,
            currency: self.currency,
        })
    }

    /// Round toward zero to this currency's minor-unit precision.
    pub fn round_to_minor_units(&self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(self.currency.minor_units(), RoundingStrategy::ToZero),
            currency: self.currency,
        }
    }
}

impl std::fmt::Display for Sum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sat(amount: Decimal) -> Sum {
        Sum::new(amount, Currency::Sat).unwrap()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn test_positive_sum_accepted() {
        let s = sat(dec!(1000));
        assert_eq!(s.amount(), dec!(1000));
        assert_eq!(s.currency(), Currency::Sat);
    }

    #[test]
    fn test_zero_sum_accepted() {
        assert!(Sum::new(dec!(0), Currency::Sat).is_ok());
        assert!(Sum::zero(Currency::Sat).is_zero());
    }

    #[test]
    fn test_negative_sum_rejected() {
        let result = Sum::new(dec!(-1), Currency::Sat);
        assert_eq!(
            result,
            Err(CoreError::NegativeSum { amount: dec!(-1) })
        );
    }

    // ── Arithmetic ───────────────────────────────────────────────────

    #[test]
    fn test_saturating_sub() {
        let a = sat(dec!(100));
        let b = sat(dec!(30));
        assert_eq!(a.saturating_sub(&b).unwrap().amount(), dec!(70));
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let a = sat(dec!(30));
        let b = sat(dec!(100));
        assert!(a.saturating_sub(&b).unwrap().is_zero());
    }

    #[test]
    fn test_saturating_sub_rejects_currency_mismatch() {
        let a = sat(dec!(100));
        let b = Sum::new(dec!(1), Currency::Btc).unwrap();
        assert!(matches!(
            a.saturating_sub(&b),
            Err(CoreError::CurrencyMismatch { .. })
        ));
    }

    // ── Rounding ─────────────────────────────────────────────────────

    #[test]
    fn test_sat_rounds_to_whole_units_toward_zero() {
        let s = sat(dec!(989.999)).round_to_minor_units();
        assert_eq!(s.amount(), dec!(989));
    }

    #[test]
    fn test_btc_rounds_to_eight_places() {
        let s = Sum::new(dec!(0.123456789), Currency::Btc)
            .unwrap()
            .round_to_minor_units();
        assert_eq!(s.amount(), dec!(0.12345678));
    }

    #[test]
    fn test_integral_amount_unchanged_by_rounding() {
        let s = sat(dec!(1000)).round_to_minor_units();
        assert_eq!(s.amount(), dec!(1000));
    }

    // ── Serde shape ──────────────────────────────────────────────────

    #[test]
    fn test_amount_serializes_as_string() {
        let s = sat(dec!(1000));
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"amount":"1000","currency":"sat"}"#);
    }

    #[test]
    fn test_sum_roundtrip() {
        let s = Sum::new(dec!(0.00000001), Currency::Btc).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let parsed: Sum = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }

    #[test]
    fn test_negative_sum_rejected_at_deserialization() {
        let result: Result<Sum, _> =
            serde_json::from_str(r#"{"amount":"-5","currency":"sat"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(sat(dec!(990)).to_string(), "990 sat");
    }
}
