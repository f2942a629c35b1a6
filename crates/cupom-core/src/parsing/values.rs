use crate::error::CupomError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal field from a receipt line, normalizing the Brazilian
/// decimal comma ("2,000" -> 2.000).
pub fn parse_decimal(s: &str) -> Result<Decimal, CupomError> {
    let s = s.trim();
    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized).map_err(|e| CupomError::InvalidNumber {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dot_decimal() {
        assert_eq!(parse_decimal("25.00").unwrap(), dec!(25.00));
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(parse_decimal("5,00").unwrap(), dec!(5.00));
    }

    #[test]
    fn test_integer() {
        assert_eq!(parse_decimal("3").unwrap(), dec!(3));
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(parse_decimal("  2,5  ").unwrap(), dec!(2.5));
    }

    #[test]
    fn test_invalid_returns_error() {
        assert!(parse_decimal("abc").is_err());
    }

    #[test]
    fn test_multiple_separators_rejected() {
        // "1.234,56" becomes "1.234.56" after normalization, which is invalid
        assert!(parse_decimal("1.234,56").is_err());
    }
}
