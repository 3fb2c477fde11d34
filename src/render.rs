//! Result rendering
//!
//! Turns the current assessment (if any) into the text shown in the result
//! card. Any UI binding can call this; it does no I/O.

use std::fmt;

use serde::Serialize;

use crate::models::{Assessment, UnitMode};

pub const WELCOME_HEADING: &str = "Welcome";
pub const RESULT_HEADING: &str = "Your BMI is...";
pub const WELCOME_MESSAGE: &str = "Enter your height and weight and you'll see your BMI result here";
pub const INVALID_BMI_MESSAGE: &str = "Invalid BMI";

/// Everything the result card displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    /// Unit panel that is visible
    pub mode: UnitMode,
    pub heading: String,
    /// Formatted BMI; `None` hides the number
    pub bmi: Option<String>,
    pub message: String,
    /// Same as `message`, with the ideal range in bold
    pub message_html: String,
}

impl ResultView {
    pub fn has_result(&self) -> bool {
        self.bmi.is_some()
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.mode.display_name())?;
        match &self.bmi {
            Some(bmi) => writeln!(f, "{} {}", self.heading, bmi)?,
            None => writeln!(f, "{}", self.heading)?,
        }
        write!(f, "{}", self.message)
    }
}

/// Build the result card for `assessment` with `mode`'s panel visible
pub fn render(assessment: Option<&Assessment>, mode: UnitMode) -> ResultView {
    match assessment {
        None => ResultView {
            mode,
            heading: WELCOME_HEADING.to_string(),
            bmi: None,
            message: WELCOME_MESSAGE.to_string(),
            message_html: WELCOME_MESSAGE.to_string(),
        },
        Some(Assessment::Unclassified { bmi }) => ResultView {
            mode,
            heading: RESULT_HEADING.to_string(),
            bmi: Some(bmi.to_string()),
            message: INVALID_BMI_MESSAGE.to_string(),
            message_html: INVALID_BMI_MESSAGE.to_string(),
        },
        Some(Assessment::Classified(result)) => {
            let lead = format!("Your BMI suggests you're a {}.", result.category.name);
            ResultView {
                mode,
                heading: RESULT_HEADING.to_string(),
                bmi: Some(result.bmi.to_string()),
                message: format!("{} Your ideal weight is between {}.", lead, result.ideal_weight),
                message_html: format!(
                    "{} Your ideal weight is between <b>{}.</b>",
                    lead, result.ideal_weight
                ),
            }
        }
    }
}
