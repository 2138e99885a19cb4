//! Value types shared by the pricing and market modules

use rust_decimal::Decimal;
use std::str::FromStr;

use super::errors::{DeskError, Result};

/// Parse a decimal amount typed by a user
///
/// Accepts plain (`12.5`) and scientific (`1e3`) notation, with a comma
/// allowed as the decimal separator.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(DeskError::InvalidInput("empty amount".to_string()));
    }

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| DeskError::InvalidInput(format!("not a number: {}", input.trim())))
}

/// Normalize a ticker symbol (trimmed, upper case)
pub fn normalize_symbol(input: &str) -> Result<String> {
    let symbol = input.trim();
    if symbol.is_empty() {
        return Err(DeskError::InvalidInput("empty symbol".to_string()));
    }
    Ok(symbol.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5").unwrap(), dec!(12.5));
        assert_eq!(parse_amount(" 20 ").unwrap(), dec!(20));
        assert_eq!(parse_amount("7,25").unwrap(), dec!(7.25));
        assert_eq!(parse_amount("-3").unwrap(), dec!(-3));
        assert_eq!(parse_amount("1e3").unwrap(), dec!(1000));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(parse_amount("abc"), Err(DeskError::InvalidInput(_))));
        assert!(matches!(parse_amount("  "), Err(DeskError::InvalidInput(_))));
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol(" acme ").unwrap(), "ACME");
        assert!(normalize_symbol("").is_err());
    }
}
