//! Tests for core_kernel

use std::str::FromStr;

use rust_decimal_macros::dec;

use core_kernel::{CoreError, Currency, ExpenseId, LedgerId, Money, MoneyError, RoundingMode};

// ============================================================================
// Currency Tests
// ============================================================================

mod currency_tests {
    use super::*;

    #[test]
    fn test_default_is_rupee() {
        assert_eq!(Currency::default(), Currency::INR);
        assert_eq!(Currency::default().symbol(), "₹");
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Currency::from_str(" usd ").unwrap(), Currency::USD);
        assert_eq!(Currency::from_str("Jpy").unwrap(), Currency::JPY);
        assert_eq!(
            Currency::from_str("xyz"),
            Err(MoneyError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_code_round_trips_through_parse() {
        for currency in [
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::INR,
            Currency::AUD,
            Currency::CAD,
        ] {
            assert_eq!(Currency::from_str(currency.code()).unwrap(), currency);
            assert_eq!(currency.to_string(), currency.code());
        }
    }
}

// ============================================================================
// Money Display Tests
// ============================================================================

mod money_display_tests {
    use super::*;

    #[test]
    fn test_non_terminating_amount() {
        let third = dec!(100) / dec!(3);
        assert_eq!(Money::new(third, Currency::INR).to_string(), "₹33.33");
    }

    #[test]
    fn test_tiny_negative_shows_as_zero() {
        assert_eq!(Money::new(dec!(-0.0000001), Currency::INR).to_string(), "₹0.00");
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        assert_eq!(Money::new(dec!(-12.5), Currency::EUR).to_string(), "€-12.50");
    }
}

// ============================================================================
// Rounding Mode Tests
// ============================================================================

mod rounding_mode_tests {
    use super::*;

    #[test]
    fn test_parse_accepts_aliases() {
        assert_eq!(RoundingMode::from_str("half_up").unwrap(), RoundingMode::HalfUp);
        assert_eq!(RoundingMode::from_str("Half-Even").unwrap(), RoundingMode::HalfEven);
        assert_eq!(RoundingMode::from_str("bankers").unwrap(), RoundingMode::HalfEven);
    }

    #[test]
    fn test_unknown_mode_is_a_configuration_error() {
        let err = RoundingMode::from_str("sideways").unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&RoundingMode::HalfEven).unwrap(), "\"half_even\"");
        assert_eq!(
            serde_json::from_str::<RoundingMode>("\"half_up\"").unwrap(),
            RoundingMode::HalfUp
        );
    }
}

// ============================================================================
// Identifier Tests
// ============================================================================

mod identifier_tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(LedgerId::new_v7(), LedgerId::new_v7());
        assert_ne!(ExpenseId::new_v7(), ExpenseId::new_v7());
    }

    #[test]
    fn test_serialized_as_bare_uuid() {
        let id = LedgerId::new_v7();
        let json = serde_json::to_string(&id).unwrap();

        assert!(!json.contains("LDG"));
        assert_eq!(serde_json::from_str::<LedgerId>(&json).unwrap(), id);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_money_error_converts_into_core_error() {
        let err: CoreError = MoneyError::UnknownCurrency("XYZ".to_string()).into();
        assert_eq!(err.to_string(), "Money error: Unknown currency code: XYZ");
    }
}
