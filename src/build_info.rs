//! Build metadata
//!
//! `build.rs` records when, for which target and with which cargo profile the
//! binary was built. The values are read back here as strings and parsed on
//! use, so a binary built without the script still reports something.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

const UNKNOWN: &str = "unknown";

/// Which binary is running
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// Cargo profile, `debug` or `release`
    pub profile: &'static str,
    pub target: &'static str,
    /// `None` when the embedded time is missing or unreadable
    pub built_at: Option<DateTime<Utc>>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_embedded(
            option_env!("BMI_BUILD_PROFILE"),
            option_env!("BMI_BUILD_TARGET"),
            option_env!("BMI_BUILT_AT"),
        )
    }

    fn from_embedded(
        profile: Option<&'static str>,
        target: Option<&'static str>,
        built_at: Option<&str>,
    ) -> Self {
        Self {
            name: NAME,
            version: VERSION,
            profile: profile.unwrap_or(UNKNOWN),
            target: target.unwrap_or(UNKNOWN),
            built_at: built_at
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|t| t.with_timezone(&Utc)),
        }
    }

    pub fn is_release(&self) -> bool {
        self.profile == "release"
    }

    /// e.g. `bmi 1.0.0 (release, x86_64-unknown-linux-gnu)`
    pub fn summary(&self) -> String {
        format!("{} {} ({}, {})", self.name, self.version, self.profile, self.target)
    }

    /// Lines of the startup banner, without the frame
    pub fn banner_lines(&self) -> Vec<String> {
        let mut lines = vec!["BMI Calculator".to_string(), self.summary()];
        if let Some(built_at) = self.built_at {
            lines.push(format!("Built {}", built_at.format("%Y-%m-%d %H:%M UTC")));
        }
        if !self.is_release() {
            lines.push("Unoptimized build".to_string());
        }
        lines
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let rule = "=".repeat(47);
    eprintln!("{}", rule);
    for line in BuildInfo::current().banner_lines() {
        eprintln!("  {}", line);
    }
    eprintln!("{}", rule);
}
