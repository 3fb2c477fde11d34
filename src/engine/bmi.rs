//! BMI computation and classification

use crate::models::{
    Assessment, Bmi, BmiCategory, BmiResult, WeightRange, BMI_CATEGORIES, HEALTHY_BMI_LOWER,
    HEALTHY_BMI_UPPER,
};
use crate::units::{Centimeters, Kilograms, Meters};

/// kg / m², rounded to one decimal place
///
/// A zero height is not rejected here: the ratio comes out infinite (or NaN
/// for 0/0) and later fails classification.
pub fn compute_bmi(height: Meters, weight: Kilograms) -> Bmi {
    Bmi::from_raw(weight.value() / height.squared())
}

/// First category, in list order, whose inclusive range holds `bmi`
pub fn classify(bmi: Bmi) -> Option<&'static BmiCategory> {
    BMI_CATEGORIES
        .iter()
        .find(|category| category.contains(bmi.value()))
}

/// Weights that put this height in the healthy range
///
/// Depends only on height, never on the BMI being reported alongside it.
pub fn ideal_weight_range(height: Centimeters) -> WeightRange {
    let h = height.to_meters().value();
    WeightRange {
        lower: Kilograms::new(HEALTHY_BMI_LOWER * h * h).rounded(),
        upper: Kilograms::new(HEALTHY_BMI_UPPER * h * h).rounded(),
    }
}

/// Compute, classify and attach the ideal range for one measurement
pub fn assess(height: Centimeters, weight: Kilograms) -> Assessment {
    let bmi = compute_bmi(height.to_meters(), weight);

    match classify(bmi) {
        Some(category) => Assessment::Classified(BmiResult {
            bmi,
            category,
            ideal_weight: ideal_weight_range(height),
        }),
        None => {
            tracing::debug!(bmi = %bmi, "BMI outside every category");
            Assessment::Unclassified { bmi }
        }
    }
}
