//! BMI Calculator
//!
//! An MCP server for body mass index calculation.

use bmi::build_info;
use bmi::config::ServiceConfig;
use bmi::mcp::BmiService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the MCP stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bmi=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServiceConfig::from_env()?;
    tracing::info!(default_mode = %config.default_mode, "Starting MCP server on stdio");

    let service = BmiService::new(&config);
    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    tracing::info!("MCP server stopped");
    Ok(())
}
