//! Form session
//!
//! Owns the unit-mode toggle, the text of each input and the assessment
//! currently on display. Every input event recomputes from scratch; an input
//! that doesn't validate leaves the display as it was.

use std::collections::HashMap;

use crate::engine::{calculate_imperial, calculate_metric};
use crate::error::{BmiError, CalcResult};
use crate::models::{Assessment, FormField, UnitMode};
use crate::render::{render, ResultView};

#[derive(Debug, Clone, Default)]
pub struct BmiForm {
    mode: UnitMode,
    values: HashMap<FormField, String>,
    assessment: Option<Assessment>,
}

impl BmiForm {
    pub fn new(mode: UnitMode) -> Self {
        Self {
            mode,
            values: HashMap::new(),
            assessment: None,
        }
    }

    pub fn mode(&self) -> UnitMode {
        self.mode
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    /// Current text of a field, empty if never typed into
    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Fields of the visible panel with their text, in form order
    pub fn active_values(&self) -> Vec<(FormField, &str)> {
        self.mode
            .fields()
            .iter()
            .map(|field| (*field, self.value(*field)))
            .collect()
    }

    /// Show `mode`'s panel, clearing every input and the result
    ///
    /// Selecting the mode that is already shown still clears.
    pub fn switch_mode(&mut self, mode: UnitMode) {
        tracing::info!(from = %self.mode, to = %mode, "Switching unit mode");
        self.mode = mode;
        self.values.clear();
        self.assessment = None;
    }

    /// Handle an input event on `field`
    ///
    /// Returns the new assessment when every field of the active panel is
    /// valid. Otherwise the text is kept, the displayed result is not
    /// touched, and the first invalid field is reported.
    pub fn input(&mut self, field: FormField, text: impl Into<String>) -> CalcResult<&Assessment> {
        if field.mode() != self.mode {
            return Err(BmiError::InactiveField {
                field,
                mode: self.mode,
            });
        }

        self.values.insert(field, text.into());

        let assessment = match self.mode {
            UnitMode::Metric => calculate_metric(
                self.value(FormField::HeightCm),
                self.value(FormField::WeightKg),
            ),
            UnitMode::Imperial => calculate_imperial(
                self.value(FormField::HeightFt),
                self.value(FormField::HeightIn),
                self.value(FormField::WeightSt),
                self.value(FormField::WeightLbs),
            ),
        }
        .map_err(|e| {
            tracing::debug!(field = %field, error = %e, "Skipping recomputation");
            e
        })?;

        tracing::debug!(bmi = %assessment.bmi(), mode = %self.mode, "Recomputed BMI");
        let current: &Assessment = self.assessment.insert(assessment);
        Ok(current)
    }

    /// Render the result card for the current state
    pub fn view(&self) -> ResultView {
        render(self.assessment(), self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::WELCOME_MESSAGE;

    fn metric_form(height: &str, weight: &str) -> BmiForm {
        let mut form = BmiForm::new(UnitMode::Metric);
        let _ = form.input(FormField::HeightCm, height);
        let _ = form.input(FormField::WeightKg, weight);
        form
    }

    #[test]
    fn test_new_form_shows_welcome() {
        let form = BmiForm::default();
        assert_eq!(form.mode(), UnitMode::Metric);
        assert!(form.assessment().is_none());
        assert_eq!(form.view().message, WELCOME_MESSAGE);
    }

    #[test]
    fn test_metric_inputs_compute() {
        let form = metric_form("170", "65");
        let view = form.view();
        assert_eq!(view.bmi.as_deref(), Some("22.5"));
        assert!(view.message.contains("healthy weight"));
    }

    #[test]
    fn test_partial_input_does_not_compute() {
        let mut form = BmiForm::new(UnitMode::Metric);
        let err = form.input(FormField::HeightCm, "170").unwrap_err();
        assert!(matches!(err, BmiError::InvalidInput { field: FormField::WeightKg, .. }));
        assert!(form.assessment().is_none());
        assert_eq!(form.value(FormField::HeightCm), "170");
    }

    #[test]
    fn test_invalid_input_keeps_previous_result() {
        let mut form = metric_form("170", "65");
        let before = form.view();

        let err = form.input(FormField::HeightCm, "17a").unwrap_err();
        assert!(matches!(err, BmiError::InvalidInput { field: FormField::HeightCm, .. }));
        assert_eq!(form.view(), before);
        assert_eq!(form.value(FormField::HeightCm), "17a");

        // Fixing the field recomputes with the new height
        let assessment = form.input(FormField::HeightCm, "180").unwrap();
        assert_eq!(assessment.bmi().value(), 20.1);
    }

    #[test]
    fn test_imperial_inputs_compute() {
        let mut form = BmiForm::new(UnitMode::Imperial);
        assert!(form.input(FormField::HeightFt, "5").is_err());
        assert!(form.input(FormField::HeightIn, "10").is_err());
        assert!(form.input(FormField::WeightSt, "12").is_err());
        let assessment = form.input(FormField::WeightLbs, "3").unwrap();
        assert_eq!(assessment.bmi().value(), 24.5);
        assert_eq!(assessment.category().map(|c| c.name), Some("healthy weight"));
    }

    #[test]
    fn test_hidden_panel_field_is_rejected() {
        let mut form = BmiForm::new(UnitMode::Metric);
        let err = form.input(FormField::WeightSt, "12").unwrap_err();
        assert_eq!(
            err,
            BmiError::InactiveField {
                field: FormField::WeightSt,
                mode: UnitMode::Metric,
            }
        );
        assert_eq!(form.value(FormField::WeightSt), "");
    }

    #[test]
    fn test_switch_mode_clears_everything() {
        let mut form = metric_form("170", "65");
        form.switch_mode(UnitMode::Imperial);
        assert_eq!(form.mode(), UnitMode::Imperial);
        assert!(form.assessment().is_none());
        assert_eq!(form.value(FormField::HeightCm), "");
        assert_eq!(form.view().heading, "Welcome");
        assert_eq!(form.view().mode, UnitMode::Imperial);
    }

    #[test]
    fn test_switch_to_same_mode_still_clears() {
        let mut form = metric_form("170", "65");
        form.switch_mode(UnitMode::Metric);
        assert!(form.assessment().is_none());
        assert!(form.active_values().iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_zero_height_renders_invalid_bmi() {
        let form = metric_form("0", "65");
        assert_eq!(form.view().message, "Invalid BMI");
    }

    #[test]
    fn test_active_values_order() {
        let form = metric_form("170", "65");
        assert_eq!(
            form.active_values(),
            vec![(FormField::HeightCm, "170"), (FormField::WeightKg, "65")]
        );
    }
}
