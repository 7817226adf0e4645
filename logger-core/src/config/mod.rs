use crate::error::ConfigError;
use crate::severity::{Severity, SeverityInput};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name registry loggers use when none is configured.
pub const DEFAULT_LOGGER_NAME: &str = "Logger";

/// Environment variable holding the threshold (number or level name).
pub const THRESHOLD_ENV: &str = "LOG_THRESHOLD";
/// Environment variable holding the logger name.
pub const NAME_ENV: &str = "LOGGER_NAME";

/// Construction options for a [`Logger`](crate::Logger).
///
/// `threshold` accepts `0..=3` or a case-insensitive level name; unknown
/// names resolve to ERROR when the logger is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub threshold: SeverityInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LoggerConfig {
    pub fn new(threshold: impl Into<SeverityInput>) -> Self {
        Self {
            threshold: threshold.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Threshold after normalization.
    pub fn resolved_threshold(&self) -> Severity {
        self.threshold.resolve()
    }

    /// Name used as the registry key.
    pub fn registry_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_LOGGER_NAME)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Self::parse_json("<inline>", json)
    }

    /// Loads a JSON config file such as `{"threshold": "debug", "name": "api"}`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: display.clone(),
            msg: e.to_string(),
        })?;
        Self::parse_json(&display, &content)
    }

    /// Reads `LOG_THRESHOLD` and `LOGGER_NAME` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Missing keys keep the defaults;
    /// a numeric threshold must be in `0..=3`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            config.threshold =
                SeverityInput::parse(&raw).map_err(|e| ConfigError::InvalidValue {
                    field: THRESHOLD_ENV.to_string(),
                    reason: e.to_string(),
                })?;
        }

        if let Some(name) = lookup(NAME_ENV) {
            let name = name.trim();
            if !name.is_empty() {
                config.name = Some(name.to_string());
            }
        }

        Ok(config)
    }

    fn parse_json(source_name: &str, json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })
    }
}
