//! BMI MCP Server Implementation
//!
//! Exposes the calculator, the form session and status as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ServiceConfig;
use crate::form::BmiForm;
use crate::tools::status::StatusTracker;
use crate::tools::{calculator, form};

/// BMI MCP Service
#[derive(Clone)]
pub struct BmiService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    /// The single form session shared by all clients on this transport
    form: Arc<Mutex<BmiForm>>,
    tool_router: ToolRouter<BmiService>,
}

impl BmiService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            form: Arc::new(Mutex::new(BmiForm::new(config.default_mode))),
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMetricBmiParams {
    /// Height in whole centimeters, digits only (e.g. "170")
    pub height_cm: String,
    /// Weight in whole kilograms, digits only (e.g. "65")
    pub weight_kg: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateImperialBmiParams {
    /// Feet part of the height, digits only
    pub height_ft: String,
    /// Inches part of the height, digits only ("0" if none)
    pub height_in: String,
    /// Stone part of the weight, digits only
    pub weight_st: String,
    /// Pounds part of the weight, digits only ("0" if none)
    pub weight_lbs: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IdealWeightRangeParams {
    /// Height in whole centimeters, digits only
    pub height_cm: String,
}

// ============================================================================
// Form Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SwitchUnitModeParams {
    /// Unit mode: metric or imperial
    pub mode: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetFormFieldParams {
    /// Field: height_cm, weight_kg (metric); height_ft, height_in, weight_st, weight_lbs (imperial)
    pub field: String,
    /// Raw text typed into the field
    pub value: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl BmiService {
    // --- Status ---

    #[tool(description = "Get the current status of the BMI service including build info, form mode, and process information")]
    async fn bmi_status(&self) -> Result<CallToolResult, McpError> {
        let form_mode = self.form.lock().await.mode();
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status(form_mode))
    }

    #[tool(description = "Get instructions for using the BMI tools, input rules, and how categories are assigned. Call this before the first calculation.")]
    fn bmi_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::BMI_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(BMI_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "Calculate BMI from height in cm and weight in kg. Values are digit-only text; invalid input returns computed=false.")]
    fn calculate_metric_bmi(&self, Parameters(p): Parameters<CalculateMetricBmiParams>) -> Result<CallToolResult, McpError> {
        json_result(&calculator::calculate_metric_bmi(&p.height_cm, &p.weight_kg))
    }

    #[tool(description = "Calculate BMI from height in feet + inches and weight in stone + pounds. All four values are required digit-only text.")]
    fn calculate_imperial_bmi(&self, Parameters(p): Parameters<CalculateImperialBmiParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::calculate_imperial_bmi(&p.height_ft, &p.height_in, &p.weight_st, &p.weight_lbs);
        json_result(&result)
    }

    #[tool(description = "Get the healthy weight range (BMI 18.5 to 24.9) in kg for a height in cm")]
    fn ideal_weight_range(&self, Parameters(p): Parameters<IdealWeightRangeParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::ideal_weight_range(&p.height_cm).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List BMI categories in match order with their inclusive ranges")]
    fn list_bmi_categories(&self) -> Result<CallToolResult, McpError> {
        json_result(&calculator::list_bmi_categories())
    }

    // --- Form Session ---

    #[tool(description = "Switch the form between metric and imperial units. Clears all fields and the displayed result.")]
    async fn switch_unit_mode(&self, Parameters(p): Parameters<SwitchUnitModeParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.form.lock().await;
        let result = form::switch_unit_mode(&mut session, &p.mode).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Type a value into a form field. The result updates only when every field on the current panel is valid; otherwise the previous result stays.")]
    async fn set_form_field(&self, Parameters(p): Parameters<SetFormFieldParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.form.lock().await;
        let result = form::set_form_field(&mut session, &p.field, &p.value).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the form's current unit mode, field values, and result card")]
    async fn get_form_view(&self) -> Result<CallToolResult, McpError> {
        let session = self.form.lock().await;
        json_result(&form::get_form_view(&session))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for BmiService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bmi".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("BMI Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "BMI Calculator - body mass index from metric or imperial measurements. \
                 Call bmi_instructions first for input rules. \
                 One-off: calculate_metric_bmi, calculate_imperial_bmi, ideal_weight_range, list_bmi_categories. \
                 Form session: switch_unit_mode, set_form_field, get_form_view. \
                 Status: bmi_status."
                    .into(),
            ),
        }
    }
}
