//! BMI Calculator Library
//!
//! Unit conversion, BMI classification and the form session behind the
//! MCP server and the command-line calculator.

pub mod build_info;
pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod mcp;
pub mod models;
pub mod render;
pub mod tools;
pub mod units;

pub use error::{BmiError, CalcResult};
pub use form::BmiForm;
pub use models::{Assessment, Bmi, BmiCategory, BmiResult, FormField, UnitMode, WeightRange};
pub use render::{render, ResultView};
