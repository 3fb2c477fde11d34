//! Calculator MCP Tools
//!
//! Stateless BMI calculations from raw field text.

use serde::Serialize;

use crate::engine::{self, calculate_imperial, calculate_metric};
use crate::error::{BmiError, CalcResult};
use crate::models::{Assessment, FormField, UnitMode, BMI_CATEGORIES};
use crate::render::render;
use crate::units::Centimeters;

/// Response for calculate_metric_bmi / calculate_imperial_bmi
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    /// False when a field failed validation and nothing was computed
    pub computed: bool,
    pub mode: String,
    pub bmi: Option<f64>,
    pub bmi_display: Option<String>,
    pub category: Option<String>,
    pub ideal_weight_lower_kg: Option<f64>,
    pub ideal_weight_upper_kg: Option<f64>,
    pub message: String,
    pub invalid_field: Option<String>,
    pub calculated_at: String,
}

impl CalculationResponse {
    fn from_outcome(mode: UnitMode, outcome: CalcResult<Assessment>) -> Self {
        let calculated_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        match outcome {
            Ok(assessment) => {
                let view = render(Some(&assessment), mode);
                let (category, lower, upper) = match &assessment {
                    Assessment::Classified(result) => (
                        Some(result.category.name.to_string()),
                        Some(result.ideal_weight.lower.value()),
                        Some(result.ideal_weight.upper.value()),
                    ),
                    Assessment::Unclassified { .. } => (None, None, None),
                };
                let bmi = assessment.bmi();
                Self {
                    computed: true,
                    mode: mode.as_str().to_string(),
                    bmi: bmi.is_finite().then(|| bmi.value()),
                    bmi_display: view.bmi,
                    category,
                    ideal_weight_lower_kg: lower,
                    ideal_weight_upper_kg: upper,
                    message: view.message,
                    invalid_field: None,
                    calculated_at,
                }
            }
            Err(e) => {
                let invalid_field = match &e {
                    BmiError::InvalidInput { field, .. } => Some(field.as_str().to_string()),
                    _ => None,
                };
                Self {
                    computed: false,
                    mode: mode.as_str().to_string(),
                    bmi: None,
                    bmi_display: None,
                    category: None,
                    ideal_weight_lower_kg: None,
                    ideal_weight_upper_kg: None,
                    message: e.to_string(),
                    invalid_field,
                    calculated_at,
                }
            }
        }
    }
}

/// Response for ideal_weight_range
#[derive(Debug, Serialize)]
pub struct IdealWeightResponse {
    pub height_cm: f64,
    pub lower_kg: f64,
    pub upper_kg: f64,
    pub display: String,
}

/// A category for listing
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub order: usize,
    pub name: &'static str,
    pub lower_inclusive: f64,
    pub upper_inclusive: f64,
}

/// Response for list_bmi_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategorySummary>,
    pub match_rule: &'static str,
}

// ============================================================================
// Calculator Tool Functions
// ============================================================================

/// Calculate BMI from metric text fields
pub fn calculate_metric_bmi(height_cm: &str, weight_kg: &str) -> CalculationResponse {
    let outcome = calculate_metric(height_cm, weight_kg);
    tracing::debug!(height_cm, weight_kg, ok = outcome.is_ok(), "Metric calculation");
    CalculationResponse::from_outcome(UnitMode::Metric, outcome)
}

/// Calculate BMI from imperial text fields
pub fn calculate_imperial_bmi(
    height_ft: &str,
    height_in: &str,
    weight_st: &str,
    weight_lbs: &str,
) -> CalculationResponse {
    let outcome = calculate_imperial(height_ft, height_in, weight_st, weight_lbs);
    tracing::debug!(height_ft, height_in, weight_st, weight_lbs, ok = outcome.is_ok(), "Imperial calculation");
    CalculationResponse::from_outcome(UnitMode::Imperial, outcome)
}

/// Healthy weight range for a height in cm
pub fn ideal_weight_range(height_cm: &str) -> Result<IdealWeightResponse, String> {
    let height = engine::parse_field(FormField::HeightCm, height_cm).map_err(|e| e.to_string())?;
    let range = engine::ideal_weight_range(Centimeters::new(height));

    Ok(IdealWeightResponse {
        height_cm: height,
        lower_kg: range.lower.value(),
        upper_kg: range.upper.value(),
        display: range.to_string(),
    })
}

/// List categories in match order
pub fn list_bmi_categories() -> ListCategoriesResponse {
    let categories = BMI_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, c)| CategorySummary {
            order: i + 1,
            name: c.name,
            lower_inclusive: c.lower_inclusive,
            upper_inclusive: c.upper_inclusive,
        })
        .collect();

    ListCategoriesResponse {
        categories,
        match_rule: "Ranges are inclusive; the first category in order that contains the BMI wins",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_response() {
        let resp = calculate_metric_bmi("170", "65");
        assert!(resp.computed);
        assert_eq!(resp.mode, "metric");
        assert_eq!(resp.bmi, Some(22.5));
        assert_eq!(resp.bmi_display.as_deref(), Some("22.5"));
        assert_eq!(resp.category.as_deref(), Some("healthy weight"));
        assert_eq!(resp.ideal_weight_lower_kg, Some(53.5));
        assert_eq!(resp.ideal_weight_upper_kg, Some(72.0));
        assert!(resp.invalid_field.is_none());
    }

    #[test]
    fn test_imperial_response() {
        let resp = calculate_imperial_bmi("5", "10", "12", "3");
        assert!(resp.computed);
        assert_eq!(resp.bmi, Some(24.5));
        assert_eq!(resp.category.as_deref(), Some("healthy weight"));
    }

    #[test]
    fn test_invalid_input_not_computed() {
        let resp = calculate_metric_bmi("17a", "65");
        assert!(!resp.computed);
        assert_eq!(resp.bmi, None);
        assert_eq!(resp.invalid_field.as_deref(), Some("height_cm"));
    }

    #[test]
    fn test_zero_height_reports_invalid_bmi() {
        let resp = calculate_metric_bmi("0", "65");
        assert!(resp.computed);
        assert_eq!(resp.bmi, None);
        assert_eq!(resp.bmi_display.as_deref(), Some("Infinity"));
        assert_eq!(resp.category, None);
        assert_eq!(resp.message, "Invalid BMI");
    }

    #[test]
    fn test_ideal_weight_range_tool() {
        let resp = ideal_weight_range("170").unwrap();
        assert_eq!(resp.lower_kg, 53.5);
        assert_eq!(resp.upper_kg, 72.0);
        assert!(ideal_weight_range("1.7").is_err());
    }

    #[test]
    fn test_list_categories() {
        let resp = list_bmi_categories();
        let names: Vec<_> = resp.categories.iter().map(|c| c.name).collect();
        assert_eq!(names, ["underweight", "healthy weight", "overweight", "obese"]);
        assert_eq!(resp.categories[0].order, 1);
    }

    #[test]
    fn test_response_serializes() {
        let json = serde_json::to_value(calculate_metric_bmi("170", "65")).unwrap();
        assert_eq!(json["computed"], true);
        assert_eq!(json["category"], "healthy weight");
    }
}
