//! Raw input validation
//!
//! A field is usable only when it is one or more ASCII digits and nothing
//! else: no sign, no decimal point, no surrounding whitespace.

use crate::error::{BmiError, CalcResult};
use crate::models::FormField;

/// True if `raw` is a non-empty run of ASCII digits
pub fn is_valid_input(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric value of a field, or `InvalidInput` naming it
pub fn parse_field(field: FormField, raw: &str) -> CalcResult<f64> {
    if !is_valid_input(raw) {
        return Err(BmiError::InvalidInput {
            field,
            value: raw.to_string(),
        });
    }

    // Digit strings always parse; very long ones saturate to infinity
    raw.parse::<f64>().map_err(|_| BmiError::InvalidInput {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs() {
        assert!(is_valid_input("0"));
        assert!(is_valid_input("170"));
        assert!(is_valid_input("007"));
    }

    #[test]
    fn test_invalid_inputs() {
        for raw in ["", "17a", " 170", "170 ", "-1", "+1", "1.5", "1e3", "½", "١٧٠"] {
            assert!(!is_valid_input(raw), "{:?} should be rejected", raw);
        }
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field(FormField::HeightCm, "170"), Ok(170.0));
        assert_eq!(parse_field(FormField::WeightKg, "007"), Ok(7.0));
        assert_eq!(
            parse_field(FormField::HeightCm, "17a"),
            Err(BmiError::InvalidInput {
                field: FormField::HeightCm,
                value: "17a".to_string(),
            })
        );
    }
}
