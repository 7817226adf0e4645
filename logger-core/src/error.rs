//! # Logger Error Types
//!
//! Centralized error definitions for the logger-core crate.
//! All errors implement `std::error::Error` and `std::fmt::Display`.

use thiserror::Error;

/// Unified error type for logger-core operations.
///
/// Wraps the specific error enums so callers that do not care about the
/// failing subsystem can propagate a single type with `?`.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error(transparent)]
    Registry(RegistryError),

    #[error(transparent)]
    Severity(SeverityError),

    #[error(transparent)]
    Config(ConfigError),

    #[error(transparent)]
    Payload(PayloadError),
}

impl From<RegistryError> for LoggerError {
    fn from(e: RegistryError) -> Self {
        LoggerError::Registry(e)
    }
}

impl From<SeverityError> for LoggerError {
    fn from(e: SeverityError) -> Self {
        LoggerError::Severity(e)
    }
}

impl From<ConfigError> for LoggerError {
    fn from(e: ConfigError) -> Self {
        LoggerError::Config(e)
    }
}

impl From<PayloadError> for LoggerError {
    fn from(e: PayloadError) -> Self {
        LoggerError::Payload(e)
    }
}

/// Registry lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Logger not found: '{name}'")]
    NotFound { name: String },
}

/// Numeric severity conversion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeverityError {
    #[error("Severity value {value} is out of range (expected 0..=3)")]
    OutOfRange { value: i64 },
}

/// Configuration loading errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error reading {path}: {msg}")]
    IoError { path: String, msg: String },

    #[error("Parse error in {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Auxiliary payload errors
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Failed to serialize payload: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}
