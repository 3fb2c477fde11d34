//! Weight-status categories
//!
//! Ranges are inclusive at both ends and checked in list order, so a value on
//! a shared boundary (18.5) belongs to the earlier category.

use serde::Serialize;

/// A named BMI range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiCategory {
    pub name: &'static str,
    pub lower_inclusive: f64,
    pub upper_inclusive: f64,
}

impl BmiCategory {
    pub const fn new(name: &'static str, lower_inclusive: f64, upper_inclusive: f64) -> Self {
        Self {
            name,
            lower_inclusive,
            upper_inclusive,
        }
    }

    pub fn contains(&self, bmi: f64) -> bool {
        bmi >= self.lower_inclusive && bmi <= self.upper_inclusive
    }
}

pub const UNDERWEIGHT: BmiCategory = BmiCategory::new("underweight", 0.0, 18.5);
pub const HEALTHY_WEIGHT: BmiCategory = BmiCategory::new("healthy weight", 18.5, 24.9);
pub const OVERWEIGHT: BmiCategory = BmiCategory::new("overweight", 25.0, 29.9);
pub const OBESE: BmiCategory = BmiCategory::new("obese", 30.0, 1000.0);

/// Categories in match order
pub static BMI_CATEGORIES: [BmiCategory; 4] = [UNDERWEIGHT, HEALTHY_WEIGHT, OVERWEIGHT, OBESE];

/// Lower bound of the healthy range, used for ideal weight
pub const HEALTHY_BMI_LOWER: f64 = HEALTHY_WEIGHT.lower_inclusive;
/// Upper bound of the healthy range, used for ideal weight
pub const HEALTHY_BMI_UPPER: f64 = HEALTHY_WEIGHT.upper_inclusive;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_ordered() {
        for pair in BMI_CATEGORIES.windows(2) {
            assert!(pair[0].upper_inclusive <= pair[1].lower_inclusive);
            assert!(pair[0].lower_inclusive < pair[1].lower_inclusive);
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        assert!(HEALTHY_WEIGHT.contains(18.5));
        assert!(HEALTHY_WEIGHT.contains(24.9));
        assert!(!HEALTHY_WEIGHT.contains(24.95));
        assert!(!OBESE.contains(f64::INFINITY));
        assert!(!UNDERWEIGHT.contains(f64::NAN));
    }
}
