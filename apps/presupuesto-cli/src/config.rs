//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default tracing filter when `PRESUPUESTO_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Labor percentage applied when neither the document nor `--labor` sets one
    pub default_labor_percentage: f64,

    /// tracing-subscriber filter directive (e.g. "info", "presupuesto=debug")
    pub log_filter: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests need not touch
    /// the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = CliConfig {
            default_labor_percentage: lookup("PRESUPUESTO_DEFAULT_LABOR_PERCENTAGE")
                .unwrap_or_else(|| "0".to_string())
                .trim()
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("PRESUPUESTO_DEFAULT_LABOR_PERCENTAGE".to_string())
                })?,

            log_filter: lookup("PRESUPUESTO_LOG")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };

        if !config.default_labor_percentage.is_finite() || config.default_labor_percentage < 0.0 {
            return Err(ConfigError::InvalidValue(
                "PRESUPUESTO_DEFAULT_LABOR_PERCENTAGE".to_string(),
            ));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.default_labor_percentage, 0.0);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("PRESUPUESTO_DEFAULT_LABOR_PERCENTAGE", " 35 "),
            ("PRESUPUESTO_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.default_labor_percentage, 35.0);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = CliConfig::from_lookup(lookup_from(&[("PRESUPUESTO_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_labor_percentage() {
        for bad in ["abc", "-5", "NaN"] {
            let result = CliConfig::from_lookup(lookup_from(&[(
                "PRESUPUESTO_DEFAULT_LABOR_PERCENTAGE",
                bad,
            )]));
            assert!(
                matches!(result, Err(ConfigError::InvalidValue(_))),
                "{bad} should be rejected"
            );
        }
    }
}
