//! Service configuration
//!
//! Read once from the environment at startup. Log levels come from
//! `RUST_LOG` through the tracing subscriber, not from here.

use crate::error::BmiError;
use crate::models::UnitMode;

/// Environment variable selecting the unit panel a new form opens with
pub const DEFAULT_UNIT_MODE_VAR: &str = "BMI_DEFAULT_UNIT_MODE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    pub default_mode: UnitMode,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, BmiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BmiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_mode = match lookup(DEFAULT_UNIT_MODE_VAR) {
            Some(raw) if !raw.trim().is_empty() => UnitMode::parse(&raw)?,
            _ => UnitMode::default(),
        };

        Ok(Self { default_mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.default_mode, UnitMode::Metric);

        let config = ServiceConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_imperial_default() {
        let config = ServiceConfig::from_lookup(|key| {
            (key == DEFAULT_UNIT_MODE_VAR).then(|| "Imperial".to_string())
        })
        .unwrap();
        assert_eq!(config.default_mode, UnitMode::Imperial);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let err = ServiceConfig::from_lookup(|_| Some("furlongs".to_string())).unwrap_err();
        assert_eq!(err, BmiError::UnknownUnitMode("furlongs".to_string()));
    }
}
