//! BMI Tools module
//!
//! MCP tool implementations for the BMI calculator.

pub mod calculator;
pub mod form;
pub mod status;
