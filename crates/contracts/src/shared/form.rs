//! Parsing of raw form input.
//!
//! Numeric fields arrive as text; anything that is not a finite number is
//! rejected with a [`FormError`] instead of flowing on as NaN.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Field '{0}' is required")]
    Required(&'static str),

    #[error("Field '{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{field}' is not a valid date: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("End date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown {field}: '{value}'")]
    UnknownOption { field: &'static str, value: String },
}

/// Trimmed, non-empty text
pub fn require(field: &'static str, raw: &str) -> Result<String, FormError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value.to_string())
}

pub fn parse_amount(field: &'static str, raw: &str) -> Result<f64, FormError> {
    let value = require(field, raw)?;
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(FormError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Empty input is `None`; anything else must be a valid amount.
pub fn parse_optional_amount(field: &'static str, raw: &str) -> Result<Option<f64>, FormError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(field, raw).map(Some)
}

pub fn parse_quantity(field: &'static str, raw: &str) -> Result<u32, FormError> {
    let value = require(field, raw)?;
    value.parse::<u32>().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// `YYYY-MM-DD`, as produced by date inputs
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, FormError> {
    let value = require(field, raw)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("price", " 125.50 "), Ok(125.5));
        assert_eq!(parse_amount("price", ""), Err(FormError::Required("price")));
        assert_eq!(
            parse_amount("price", "12abc"),
            Err(FormError::InvalidNumber {
                field: "price",
                value: "12abc".into()
            })
        );
        assert!(parse_amount("price", "NaN").is_err());
        assert!(parse_amount("price", "inf").is_err());
    }

    #[test]
    fn test_parse_optional_amount() {
        assert_eq!(parse_optional_amount("orderValue", "  "), Ok(None));
        assert_eq!(parse_optional_amount("orderValue", "5000"), Ok(Some(5000.0)));
        assert!(parse_optional_amount("orderValue", "five").is_err());
    }

    #[test]
    fn test_parse_quantity_and_date() {
        assert_eq!(parse_quantity("buyQuantity", "10"), Ok(10));
        assert!(parse_quantity("buyQuantity", "-1").is_err());
        assert_eq!(
            parse_date("startDate", "2024-03-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert!(matches!(
            parse_date("startDate", "01/03/2024"),
            Err(FormError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_error_message() {
        let err = FormError::InvalidNumber {
            field: "basePrice",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "Field 'basePrice' is not a valid number: 'abc'");
    }
}
