//! Data models
//!
//! Value types shared by the engine, the form session and the tools.

mod assessment;
mod category;
mod unit_mode;

pub use assessment::{Assessment, Bmi, BmiResult, WeightRange};
pub use category::{
    BmiCategory, BMI_CATEGORIES, HEALTHY_BMI_LOWER, HEALTHY_BMI_UPPER, HEALTHY_WEIGHT, OBESE,
    OVERWEIGHT, UNDERWEIGHT,
};
pub use unit_mode::{FormField, UnitMode};
