//! Build script for the BMI calculator
//!
//! Embeds the build time, cargo profile and target triple so `bmi_status`
//! and the startup banner can say which binary is running.

use std::env;

/// Cargo sets these for build scripts; a missing one is recorded as "unknown"
fn cargo_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| "unknown".to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=PROFILE");

    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    println!("cargo:rustc-env=BMI_BUILT_AT={}", built_at);
    println!("cargo:rustc-env=BMI_BUILD_PROFILE={}", cargo_var("PROFILE"));
    println!("cargo:rustc-env=BMI_BUILD_TARGET={}", cargo_var("TARGET"));
}
