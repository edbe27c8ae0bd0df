use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MoneyError {
    #[error("Amount is not a finite number: {0}")]
    NonFinite(f64),
    #[error("Amount is out of range: {0}")]
    OutOfRange(f64),
}

/// A transaction amount in a single, implicit currency.
///
/// Amounts are signed; the engine never validates the sign. Serialized as
/// a JSON number to match the presentation layer's `amount` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Converts a floating-point amount coming from a presentation layer.
    ///
    /// NaN and infinities are rejected here so that every `Money` the
    /// engine sees is a real number. The value is not rounded to cents;
    /// threshold rules compare the caller's amount, and only `Display`
    /// rounds.
    pub fn try_from_f64(amount: f64) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::NonFinite(amount));
        }
        Decimal::from_f64(amount)
            .map(Money)
            .ok_or(MoneyError::OutOfRange(amount))
    }

    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl TryFrom<f64> for Money {
    type Error = MoneyError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Money::try_from_f64(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cents_scales_by_hundred() {
        assert_eq!(Money::from_cents(150_000).as_decimal(), Decimal::new(1500, 0));
        assert_eq!(Money::from_cents(-499).to_string(), "$-4.99");
    }

    #[test]
    fn try_from_f64_accepts_finite_amounts() {
        assert_eq!(Money::try_from_f64(1500.0), Ok(Money::from_cents(150_000)));
        assert_eq!(Money::try_from_f64(4.25), Ok(Money::from_cents(425)));
        assert_eq!(Money::try_from_f64(-12.5), Ok(Money::from_cents(-1250)));
        assert_eq!(Money::try_from_f64(0.0), Ok(Money::zero()));
    }

    #[test]
    fn try_from_f64_keeps_sub_cent_precision() {
        let rent = Money::try_from_f64(1000.004).unwrap();
        assert!(rent > Money::from_cents(100_000));
        assert_eq!(rent.to_string(), "$1000.00");

        let coffee = Money::try_from_f64(14.996).unwrap();
        assert!(coffee < Money::from_cents(1_500));
    }

    #[test]
    fn serializes_as_json_number() {
        let json = serde_json::to_value(Money::from_cents(1_500)).unwrap();
        assert_eq!(json, serde_json::json!(15.0));
        let back: Money = serde_json::from_str("14.5").unwrap();
        assert_eq!(back, Money::from_cents(1_450));
    }

    #[test]
    fn try_from_f64_rejects_non_finite() {
        assert!(matches!(Money::try_from_f64(f64::NAN), Err(MoneyError::NonFinite(_))));
        assert!(matches!(
            Money::try_from_f64(f64::INFINITY),
            Err(MoneyError::NonFinite(_))
        ));
        assert!(matches!(
            Money::try_from_f64(f64::NEG_INFINITY),
            Err(MoneyError::NonFinite(_))
        ));
    }

    #[test]
    fn try_from_f64_rejects_out_of_range() {
        assert!(matches!(Money::try_from_f64(1e40), Err(MoneyError::OutOfRange(_))));
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(Money::from_cents(100_001) > Money::from_cents(100_000));
        assert!(Money::from_cents(-1) < Money::zero());
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
    }
}
