//! Raw text to assessment, per unit system
//!
//! Every required field is validated before anything is computed; one bad
//! field means no result at all.

use super::bmi::assess;
use super::validate::parse_field;
use crate::error::CalcResult;
use crate::models::{Assessment, FormField};
use crate::units::{
    imperial_height_to_meters, imperial_weight_to_kg, Centimeters, Feet, Inches, Kilograms,
    Pounds, Stone,
};

/// Assess a metric height (cm) and weight (kg)
pub fn calculate_metric(height_cm: &str, weight_kg: &str) -> CalcResult<Assessment> {
    let height = parse_field(FormField::HeightCm, height_cm)?;
    let weight = parse_field(FormField::WeightKg, weight_kg)?;

    Ok(assess(Centimeters::new(height), Kilograms::new(weight)))
}

/// Assess an imperial height (ft + in) and weight (st + lb)
pub fn calculate_imperial(
    height_ft: &str,
    height_in: &str,
    weight_st: &str,
    weight_lbs: &str,
) -> CalcResult<Assessment> {
    let feet = parse_field(FormField::HeightFt, height_ft)?;
    let inches = parse_field(FormField::HeightIn, height_in)?;
    let stone = parse_field(FormField::WeightSt, weight_st)?;
    let pounds = parse_field(FormField::WeightLbs, weight_lbs)?;

    let height = imperial_height_to_meters(Feet::new(feet), Inches::new(inches));
    let weight = imperial_weight_to_kg(Stone::new(stone), Pounds::new(pounds));

    Ok(assess(height.to_centimeters(), weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BmiError;

    #[test]
    fn test_metric_example() {
        let result = calculate_metric("170", "65").unwrap().into_result().unwrap();
        assert_eq!(result.bmi.value(), 22.5);
        assert_eq!(result.category.name, "healthy weight");
        assert_eq!(result.ideal_weight.lower.value(), 53.5);
        assert_eq!(result.ideal_weight.upper.value(), 72.0);
    }

    #[test]
    fn test_imperial_example() {
        let result = calculate_imperial("5", "10", "12", "3")
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(result.bmi.value(), 24.5);
        assert_eq!(result.category.name, "healthy weight");
        // 177.8 cm
        assert_eq!(result.ideal_weight.lower.value(), 58.5);
        assert_eq!(result.ideal_weight.upper.value(), 78.7);
    }

    #[test]
    fn test_metric_invalid_height() {
        assert_eq!(
            calculate_metric("17a", "65"),
            Err(BmiError::InvalidInput {
                field: FormField::HeightCm,
                value: "17a".to_string(),
            })
        );
    }

    #[test]
    fn test_metric_invalid_weight() {
        let err = calculate_metric("170", "").unwrap_err();
        assert!(matches!(err, BmiError::InvalidInput { field: FormField::WeightKg, .. }));
    }

    #[test]
    fn test_imperial_requires_every_field() {
        assert!(calculate_imperial("5", "", "12", "3").is_err());
        assert!(calculate_imperial("5", "10", "12", "3.5").is_err());
        assert!(calculate_imperial("5", "10", "-1", "3").is_err());
        // Zero pounds is still a value
        assert!(calculate_imperial("5", "10", "12", "0").is_ok());
    }

    #[test]
    fn test_metric_zero_height_is_invalid_bmi() {
        let assessment = calculate_metric("0", "65").unwrap();
        assert!(matches!(assessment, Assessment::Unclassified { .. }));
    }
}
