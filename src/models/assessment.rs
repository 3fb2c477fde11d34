//! BMI values and assessment results
//!
//! Nothing here is stored; a result lives until the next input replaces it.

use std::fmt;

use serde::Serialize;

use super::category::BmiCategory;
use crate::error::BmiError;
use crate::units::{round_to_tenth, Kilograms};

/// Body mass index, held at one decimal place
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Bmi(f64);

impl Bmi {
    /// Round a raw kg/m² ratio to the reported precision
    pub fn from_raw(ratio: f64) -> Self {
        Self(round_to_tenth(ratio))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

/// One decimal place, with `Infinity`/`NaN` for non-finite values
fn write_tenths(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{:.1}", value)
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tenths(f, self.0)
    }
}

/// Healthy weight bounds for a height
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightRange {
    pub lower: Kilograms,
    pub upper: Kilograms,
}

impl fmt::Display for WeightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tenths(f, self.lower.value())?;
        f.write_str("kgs - ")?;
        write_tenths(f, self.upper.value())?;
        f.write_str("kgs")
    }
}

/// A classified BMI with the ideal weight for the same height
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: Bmi,
    pub category: &'static BmiCategory,
    pub ideal_weight: WeightRange,
}

/// Outcome of assessing one height/weight pair
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assessment {
    Classified(BmiResult),
    /// BMI outside every category, shown as "Invalid BMI"
    Unclassified { bmi: Bmi },
}

impl Assessment {
    pub fn bmi(&self) -> Bmi {
        match self {
            Assessment::Classified(result) => result.bmi,
            Assessment::Unclassified { bmi } => *bmi,
        }
    }

    pub fn category(&self) -> Option<&'static BmiCategory> {
        match self {
            Assessment::Classified(result) => Some(result.category),
            Assessment::Unclassified { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<BmiResult, BmiError> {
        match self {
            Assessment::Classified(result) => Ok(result),
            Assessment::Unclassified { bmi } => Err(BmiError::NoMatchingCategory { bmi: bmi.value() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_rounds_on_construction() {
        assert_eq!(Bmi::from_raw(22.491_349).value(), 22.5);
        assert_eq!(Bmi::from_raw(24.535).value(), 24.5);
    }

    #[test]
    fn test_bmi_display() {
        assert_eq!(Bmi::from_raw(22.0).to_string(), "22.0");
        assert_eq!(Bmi::from_raw(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Bmi::from_raw(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_weight_range_display() {
        let range = WeightRange {
            lower: Kilograms::new(53.5),
            upper: Kilograms::new(72.0),
        };
        assert_eq!(range.to_string(), "53.5kgs - 72.0kgs");
    }

    #[test]
    fn test_weight_range_display_non_finite() {
        let range = WeightRange {
            lower: Kilograms::new(f64::INFINITY),
            upper: Kilograms::new(f64::INFINITY),
        };
        assert_eq!(range.to_string(), "Infinitykgs - Infinitykgs");
    }

    #[test]
    fn test_unclassified_into_result() {
        let assessment = Assessment::Unclassified { bmi: Bmi::from_raw(-1.0) };
        assert_eq!(assessment.category(), None);
        assert_eq!(
            assessment.into_result(),
            Err(BmiError::NoMatchingCategory { bmi: -1.0 })
        );
    }
}
