//! BMI engine
//!
//! Pure functions from validated measurements to an assessment.

pub mod bmi;
pub mod calculator;
pub mod validate;

pub use bmi::{assess, classify, compute_bmi, ideal_weight_range};
pub use calculator::{calculate_imperial, calculate_metric};
pub use validate::{is_valid_input, parse_field};
