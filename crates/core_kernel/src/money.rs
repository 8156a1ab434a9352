//! Display currency, money formatting and rounding modes
//!
//! A split session works in exactly one display currency. The currency only
//! drives presentation (symbol and decimal places), never conversion, so
//! there is no arithmetic on `Money` itself.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::CoreError;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    #[default]
    INR,
    AUD,
    CAD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::INR => "₹",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::INR => "INR",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "INR" => Ok(Currency::INR),
            "AUD" => Ok(Currency::AUD),
            "CAD" => Ok(Currency::CAD),
            other => Err(MoneyError::UnknownCurrency(other.to_string())),
        }
    }
}

/// How a midpoint value is rounded when an amount is cut to a fixed number
/// of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Midpoints round away from zero (1.005 -> 1.01, -1.005 -> -1.01)
    #[default]
    HalfUp,
    /// Banker's rounding, midpoints round to the even neighbour (1.005 -> 1.00)
    HalfEven,
}

impl RoundingMode {
    /// Returns the matching rust_decimal strategy
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Rounds `value` to `dp` decimal places
    pub fn round(&self, value: Decimal, dp: u32) -> Decimal {
        value.round_dp_with_strategy(dp, self.strategy())
    }
}

impl FromStr for RoundingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "half_up" => Ok(RoundingMode::HalfUp),
            "half_even" | "bankers" => Ok(RoundingMode::HalfEven),
            other => Err(CoreError::configuration(format!(
                "unknown rounding mode '{}', expected half_up or half_even",
                other
            ))),
        }
    }
}

/// Errors that can occur while reading money settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// An amount paired with the currency it is shown in
///
/// Amounts keep full precision; only `Display` rounds, to the currency's
/// decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        let rounded = RoundingMode::HalfUp.round(self.amount, dp);
        // "-0.00" after rounding a tiny negative
        let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
        write!(f, "{}{:.*}", self.currency.symbol(), dp as usize, rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_rounds_half_up_to_currency_places() {
        assert_eq!(Money::new(dec!(50), Currency::INR).to_string(), "₹50.00");
        assert_eq!(Money::new(dec!(0.125), Currency::USD).to_string(), "$0.13");
        assert_eq!(Money::new(dec!(1234.5), Currency::JPY).to_string(), "¥1235");
    }

    #[test]
    fn test_rounding_modes_differ_on_midpoint() {
        assert_eq!(RoundingMode::HalfUp.round(dec!(2.345), 2), dec!(2.35));
        assert_eq!(RoundingMode::HalfEven.round(dec!(2.345), 2), dec!(2.34));
        assert_eq!(RoundingMode::HalfUp.round(dec!(-2.345), 2), dec!(-2.35));
    }

    proptest! {
        #[test]
        fn rounding_never_moves_more_than_half_a_unit(
            mantissa in -1_000_000_000i64..1_000_000_000i64,
            scale in 0u32..8u32,
            dp in 0u32..4u32
        ) {
            let value = Decimal::new(mantissa, scale);
            let half_unit = Decimal::new(5, dp + 1);
            for mode in [RoundingMode::HalfUp, RoundingMode::HalfEven] {
                let rounded = mode.round(value, dp);
                prop_assert!((rounded - value).abs() <= half_unit);
            }
        }
    }
}
