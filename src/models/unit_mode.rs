//! Unit mode and form fields
//!
//! The form shows either the metric panel (cm, kg) or the imperial panel
//! (ft + in, st + lb). Each input field belongs to exactly one panel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BmiError;

/// Which unit panel is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    #[default]
    Metric,
    Imperial,
}

impl UnitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitMode::Metric => "metric",
            UnitMode::Imperial => "imperial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Some(UnitMode::Metric),
            "imperial" | "us" | "uk" => Some(UnitMode::Imperial),
            _ => None,
        }
    }

    /// Parse, reporting the rejected text
    pub fn parse(s: &str) -> Result<Self, BmiError> {
        Self::from_str(s).ok_or_else(|| BmiError::UnknownUnitMode(s.to_string()))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitMode::Metric => "Metric",
            UnitMode::Imperial => "Imperial",
        }
    }

    /// Input fields shown on this panel, in form order
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            UnitMode::Metric => &[FormField::HeightCm, FormField::WeightKg],
            UnitMode::Imperial => &[
                FormField::HeightFt,
                FormField::HeightIn,
                FormField::WeightSt,
                FormField::WeightLbs,
            ],
        }
    }
}

impl fmt::Display for UnitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text input on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    HeightCm,
    WeightKg,
    HeightFt,
    HeightIn,
    WeightSt,
    WeightLbs,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::HeightCm => "height_cm",
            FormField::WeightKg => "weight_kg",
            FormField::HeightFt => "height_ft",
            FormField::HeightIn => "height_in",
            FormField::WeightSt => "weight_st",
            FormField::WeightLbs => "weight_lbs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "height_cm" | "height" | "cm" => Some(FormField::HeightCm),
            "weight_kg" | "weight" | "kg" => Some(FormField::WeightKg),
            "height_ft" | "ft" | "feet" => Some(FormField::HeightFt),
            "height_in" | "in" | "inches" => Some(FormField::HeightIn),
            "weight_st" | "st" | "stone" => Some(FormField::WeightSt),
            "weight_lbs" | "weight_lb" | "lbs" | "lb" | "pounds" => Some(FormField::WeightLbs),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self, BmiError> {
        Self::from_str(s).ok_or_else(|| BmiError::UnknownField(s.to_string()))
    }

    /// Panel this field lives on
    pub fn mode(&self) -> UnitMode {
        match self {
            FormField::HeightCm | FormField::WeightKg => UnitMode::Metric,
            _ => UnitMode::Imperial,
        }
    }

    /// Unit label shown next to the input
    pub fn unit_label(&self) -> &'static str {
        match self {
            FormField::HeightCm => "cm",
            FormField::WeightKg => "kg",
            FormField::HeightFt => "ft",
            FormField::HeightIn => "in",
            FormField::WeightSt => "st",
            FormField::WeightLbs => "lbs",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
