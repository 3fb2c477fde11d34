//! One-shot BMI calculation from the command line
//! Usage: bmi_calc [--html] metric <CM> <KG>
//!        bmi_calc [--html] imperial <FT> <IN> <ST> <LBS>

use bmi::{BmiForm, FormField, ResultView, UnitMode};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Calculate body mass index and the healthy weight range for a height.
#[derive(Debug, Parser)]
#[command(name = "bmi_calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print the result message as HTML
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    mode: Mode,
}

/// Unit system of the values. Values are whole numbers written with digits
/// only; anything else leaves the result empty.
#[derive(Debug, Subcommand)]
enum Mode {
    /// Height in centimeters, weight in kilograms
    Metric {
        #[arg(value_name = "CM")]
        cm: String,
        #[arg(value_name = "KG")]
        kg: String,
    },

    /// Height in feet + inches, weight in stone + pounds
    Imperial {
        #[arg(value_name = "FT")]
        ft: String,
        #[arg(value_name = "IN")]
        inches: String,
        #[arg(value_name = "ST")]
        st: String,
        #[arg(value_name = "LBS")]
        lbs: String,
    },
}

impl Mode {
    fn unit_mode(&self) -> UnitMode {
        match self {
            Mode::Metric { .. } => UnitMode::Metric,
            Mode::Imperial { .. } => UnitMode::Imperial,
        }
    }

    /// Field values in form order
    fn inputs(&self) -> Vec<(FormField, &str)> {
        match self {
            Mode::Metric { cm, kg } => vec![
                (FormField::HeightCm, cm.as_str()),
                (FormField::WeightKg, kg.as_str()),
            ],
            Mode::Imperial { ft, inches, st, lbs } => vec![
                (FormField::HeightFt, ft.as_str()),
                (FormField::HeightIn, inches.as_str()),
                (FormField::WeightSt, st.as_str()),
                (FormField::WeightLbs, lbs.as_str()),
            ],
        }
    }
}

/// Feed the values in like keystrokes; the view only changes once all are valid
fn calculate(mode: &Mode) -> ResultView {
    let mut form = BmiForm::new(mode.unit_mode());
    for (field, value) in mode.inputs() {
        if let Err(e) = form.input(field, value) {
            tracing::debug!(error = %e, "Input not applied");
        }
    }
    form.view()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let view = calculate(&cli.mode);

    if cli.html {
        println!("{}", view.message_html);
    } else {
        println!("{}", view);
    }
}
