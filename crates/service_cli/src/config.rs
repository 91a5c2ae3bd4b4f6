//! Calculator configuration management.
//!
//! Handles loading of `npv-calc.toml` with environment variable override
//! support. A missing file yields the defaults; a malformed one is an error.

use cashflow_core::input::parse_rate;
use cashflow_core::types::PeriodConvention;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "npv-calc.toml";

/// Calculator configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalcConfig {
    /// Period count pre-filled in the form
    pub default_periods: usize,

    /// Rate text pre-filled in the form
    pub default_rate: String,

    /// Period indexing convention
    pub convention: PeriodConvention,

    /// Largest accepted period count
    pub max_periods: usize,

    /// Decimal places for displayed values
    pub decimals: usize,

    /// Log level
    pub log_level: String,

    /// Log file for the TUI; logging stays off in the TUI when unset
    pub log_file: Option<PathBuf>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            default_periods: 3,
            default_rate: "0.1".to_string(),
            convention: PeriodConvention::default(),
            max_periods: 120,
            decimals: 2,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl CalcConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(convention) = lookup("NPV_CALC_CONVENTION") {
            if let Ok(convention) = convention.parse() {
                self.convention = convention;
            }
        }

        if let Some(max_periods) = lookup("NPV_CALC_MAX_PERIODS") {
            if let Ok(max_periods) = max_periods.trim().parse() {
                self.max_periods = max_periods;
            }
        }

        if let Some(decimals) = lookup("NPV_CALC_DECIMALS") {
            if let Ok(decimals) = decimals.trim().parse() {
                self.decimals = decimals;
            }
        }

        if let Some(log_level) = lookup("NPV_CALC_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(log_file) = lookup("NPV_CALC_LOG_FILE") {
            self.log_file = Some(PathBuf::from(log_file));
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.max_periods == 0 || self.max_periods > MAX_PERIODS_LIMIT {
            errors.push(format!(
                "max_periods {} must be between 1 and {}",
                self.max_periods, MAX_PERIODS_LIMIT
            ));
        }

        if self.decimals > MAX_DECIMALS {
            errors.push(format!(
                "decimals {} exceeds maximum allowed ({})",
                self.decimals, MAX_DECIMALS
            ));
        }

        if self.default_periods == 0 || self.default_periods > self.max_periods {
            errors.push(format!(
                "default_periods {} must be between 1 and max_periods ({})",
                self.default_periods, self.max_periods
            ));
        }

        if let Err(e) = parse_rate(&self.default_rate) {
            errors.push(format!("default_rate: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

const MAX_PERIODS_LIMIT: usize = 1000;
const MAX_DECIMALS: usize = 10;

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {}: {message}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        message: String,
    },

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn validation_errors(config: &CalcConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config() {
        let config = CalcConfig::default();
        assert_eq!(config.convention, PeriodConvention::ZeroBased);
        assert_eq!(config.default_periods, 3);
        assert_eq!(config.max_periods, 120);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(CalcConfig::default().validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CalcConfig::default().with_overrides_from(lookup(&[
            ("NPV_CALC_CONVENTION", "one"),
            ("NPV_CALC_MAX_PERIODS", "24"),
            ("NPV_CALC_DECIMALS", "4"),
            ("NPV_CALC_LOG_FILE", "/tmp/npv.log"),
        ]));
        assert_eq!(config.convention, PeriodConvention::OneBased);
        assert_eq!(config.max_periods, 24);
        assert_eq!(config.decimals, 4);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/npv.log")));
    }

    #[test]
    fn test_unparseable_overrides_are_ignored() {
        let config = CalcConfig::default().with_overrides_from(lookup(&[
            ("NPV_CALC_CONVENTION", "sideways"),
            ("NPV_CALC_MAX_PERIODS", "many"),
        ]));
        assert_eq!(config.convention, PeriodConvention::ZeroBased);
        assert_eq!(config.max_periods, 120);
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = CalcConfig {
            log_level: "loud".to_string(),
            ..CalcConfig::default()
        };
        assert!(validation_errors(&config)
            .iter()
            .any(|e| e.contains("log_level")));
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO"] {
            let config = CalcConfig {
                log_level: level.to_string(),
                ..CalcConfig::default()
            };
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = CalcConfig {
            max_periods: 0,
            decimals: 42,
            default_rate: "abc".to_string(),
            ..CalcConfig::default()
        };
        let errors = validation_errors(&config);
        assert!(errors.iter().any(|e| e.contains("max_periods")));
        assert!(errors.iter().any(|e| e.contains("decimals")));
        assert!(errors.iter().any(|e| e.contains("default_periods")));
        assert!(errors.iter().any(|e| e.contains("default_rate")));
    }

    #[test]
    fn test_load_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "default_periods = 5\ndefault_rate = \"8%\"\nconvention = \"one\"\ndecimals = 3"
        )
        .unwrap();

        let config = CalcConfig::load(file.path()).unwrap();
        assert_eq!(config.default_periods, 5);
        assert_eq!(config.default_rate, "8%");
        assert_eq!(config.convention, PeriodConvention::OneBased);
        assert_eq!(config.decimals, 3);
        assert_eq!(config.max_periods, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_periods = \"three\"").unwrap();
        assert!(matches!(
            CalcConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CalcConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CalcConfig::default());
    }
}
