//! Error types for BMI calculation and the form session

use thiserror::Error;

use crate::models::{FormField, UnitMode};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    /// A required field is not a plain digit string
    #[error("Invalid input for {field}: '{value}' (expected digits only)")]
    InvalidInput { field: FormField, value: String },

    #[error("BMI {bmi} does not fall into any category")]
    NoMatchingCategory { bmi: f64 },

    #[error("Field {field} is not shown in {mode} mode")]
    InactiveField { field: FormField, mode: UnitMode },

    #[error("Unknown unit mode: '{0}'. Valid modes: metric, imperial")]
    UnknownUnitMode(String),

    #[error("Unknown field: '{0}'. Valid fields: height_cm, weight_kg, height_ft, height_in, weight_st, weight_lbs")]
    UnknownField(String),
}

/// Result type for calculations
pub type CalcResult<T> = Result<T, BmiError>;
