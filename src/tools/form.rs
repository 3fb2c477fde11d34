//! Form Session MCP Tools
//!
//! Drive the shared form the way a user would: switch panels, type into
//! fields, read back the result card.

use serde::Serialize;

use crate::error::BmiError;
use crate::form::BmiForm;
use crate::models::{FormField, UnitMode};
use crate::render::ResultView;

/// A field on the visible panel
#[derive(Debug, Serialize)]
pub struct FieldValue {
    pub field: String,
    pub unit: String,
    pub value: String,
}

/// Response for get_form_view and switch_unit_mode
#[derive(Debug, Serialize)]
pub struct FormViewResponse {
    pub mode: String,
    pub fields: Vec<FieldValue>,
    pub view: ResultView,
}

impl From<&BmiForm> for FormViewResponse {
    fn from(form: &BmiForm) -> Self {
        let fields = form
            .active_values()
            .into_iter()
            .map(|(field, value)| FieldValue {
                field: field.as_str().to_string(),
                unit: field.unit_label().to_string(),
                value: value.to_string(),
            })
            .collect();

        Self {
            mode: form.mode().as_str().to_string(),
            fields,
            view: form.view(),
        }
    }
}

/// Response for set_form_field
#[derive(Debug, Serialize)]
pub struct SetFieldResponse {
    /// True when this input produced a new result
    pub recomputed: bool,
    /// Why no result was produced, if it wasn't
    pub skipped_reason: Option<String>,
    pub form: FormViewResponse,
}

// ============================================================================
// Form Tool Functions
// ============================================================================

/// Select a unit panel; clears every field and the result
pub fn switch_unit_mode(form: &mut BmiForm, mode: &str) -> Result<FormViewResponse, String> {
    let mode = UnitMode::parse(mode).map_err(|e| e.to_string())?;
    form.switch_mode(mode);
    Ok(FormViewResponse::from(&*form))
}

/// Type `value` into `field`
pub fn set_form_field(form: &mut BmiForm, field: &str, value: &str) -> Result<SetFieldResponse, String> {
    let field = FormField::parse(field).map_err(|e| e.to_string())?;

    let skipped_reason = match form.input(field, value) {
        Ok(_) => None,
        Err(e @ BmiError::InvalidInput { .. }) => Some(e.to_string()),
        Err(e) => return Err(e.to_string()),
    };

    Ok(SetFieldResponse {
        recomputed: skipped_reason.is_none(),
        skipped_reason,
        form: FormViewResponse::from(&*form),
    })
}

/// Current fields and result card
pub fn get_form_view(form: &BmiForm) -> FormViewResponse {
    FormViewResponse::from(form)
}
