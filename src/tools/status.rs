//! BMI Status Tool
//!
//! Runtime status of the service and the usage guide served to assistants.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::models::UnitMode;

/// Usage guide for AI assistants
pub const BMI_INSTRUCTIONS: &str = r#"
# BMI Calculator Instructions

## One-off calculations

- `calculate_metric_bmi`: `height_cm`, `weight_kg`
- `calculate_imperial_bmi`: `height_ft`, `height_in`, `weight_st`, `weight_lbs`

All values are passed as text and must be whole numbers written with digits
only. No decimals, signs or spaces: "170" is accepted, "170.5", "-5" and
" 170" are not. Imperial calculations need all four fields; use "0" for an
empty part (e.g. 6 ft 0 in).

If any field is rejected the response has `computed: false` and names the
field in `invalid_field`. Nothing is calculated from partial input.

## Reading the result

| Category       | BMI range (inclusive) |
|----------------|-----------------------|
| underweight    | 0 - 18.5              |
| healthy weight | 18.5 - 24.9           |
| overweight     | 25 - 29.9             |
| obese          | 30 - 1000             |

BMI is rounded to one decimal place. The first matching row wins, so a BMI of
exactly 18.5 is reported as underweight.

The ideal weight range is the weight that would give a BMI of 18.5 to 24.9 at
the same height. It is always shown in kilograms.

A BMI outside every range (for example a height of 0) is reported as
"Invalid BMI" with no category.

## Form session

The server keeps one form, like the web widget:

1. `switch_unit_mode` with `metric` or `imperial` (clears all fields)
2. `set_form_field` for each field; the result updates once every field on
   the panel is valid, and an invalid entry leaves the last result in place
3. `get_form_view` to read the fields and the result card
"#;

/// Runtime status of the BMI service
#[derive(Debug, Clone, Serialize)]
pub struct BmiStatus {
    pub version: &'static str,
    pub build_profile: &'static str,
    pub build_target: &'static str,
    pub built_at: Option<DateTime<Utc>>,

    /// Unit panel the form session is showing
    pub form_mode: UnitMode,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Collects runtime information for `bmi_status`
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn get_status(&self, form_mode: UnitMode) -> BmiStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        BmiStatus {
            version: build_info.version,
            build_profile: build_info.profile,
            build_target: build_info.target,
            built_at: build_info.built_at,
            form_mode,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
