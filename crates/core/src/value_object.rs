//! Value objects: equality by value, not identity.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Unit price of a variant, in the store currency.
///
/// The external API takes a plain decimal number, so the amount is kept as an
/// exact decimal and serialized as a JSON number with every digit preserved.
/// The store currency is fixed when the store is created; no currency travels
/// with the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Create a price; must be non-negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation(format!("price must be non-negative, got {amount}")));
        }
        Ok(Self(amount))
    }

    /// Price from integer minor units (cents), the way local records often store money.
    pub fn from_minor_units(cents: u64) -> Self {
        Self(Decimal::from(cents) / Decimal::ONE_HUNDRED)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str_exact(s.trim())
            .map_err(|e| DomainError::validation(format!("invalid price '{s}': {e}")))?;
        Self::new(amount)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_negative_amounts() {
        assert!(Price::new(Decimal::new(-1, 2)).is_err());
        assert!("-3.5".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Price::default(), Price::ZERO);
        assert_eq!(Price::ZERO.amount(), Decimal::ZERO);
        assert_eq!("-0".parse::<Price>().unwrap(), Price::ZERO);
    }

    #[test]
    fn decimal_sums_stay_exact() {
        let sum = Decimal::new(1, 1) + Decimal::new(2, 1);
        let price = Price::new(sum).unwrap();

        assert_eq!(serde_json::to_string(&price).unwrap(), "0.3");
        assert_eq!(price.to_string(), "0.30");
    }

    #[test]
    fn serde_keeps_every_digit() {
        let input = "9007199254740993.01";
        let price: Price = serde_json::from_str(input).unwrap();

        assert_eq!(price, input.parse().unwrap());
        assert_eq!(serde_json::to_string(&price).unwrap(), input);
    }

    #[test]
    fn deserialization_enforces_validation() {
        assert!(serde_json::from_str::<Price>("-3.5").is_err());
        assert_eq!(
            serde_json::from_str::<Price>("19.99").unwrap(),
            Price::from_minor_units(1999)
        );
    }

    proptest! {
        #[test]
        fn minor_units_round_trip_through_display(cents in 0u64..10_000_000_000) {
            let price = Price::from_minor_units(cents);
            let shown = price.to_string();
            prop_assert_eq!(shown.parse::<Price>().unwrap(), price);
        }
    }
}
