//! # Logger Core - Leveled Console Logging
//!
//! A small leveled logger that prints tagged, timestamped lines to stdout
//! (INFO, DEBUG) or stderr (WARN, ERROR), with an application-owned registry
//! that hands out one shared logger per name.
//!
//! ## Modules
//!
//! - [`config`] - Logger configuration from code, JSON or the environment
//! - [`error`] - Typed error handling with thiserror
//! - [`logger`] - The `Logger` and its line format
//! - [`payload`] - Auxiliary payload lines
//! - [`registry`] - Name-keyed logger registry
//! - [`severity`] - Severity levels and name normalization
//! - [`sink`] - Console and in-memory output sinks
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use logger_core::{LoggerConfig, LoggerRegistry, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let registry = LoggerRegistry::with_sink(sink.clone());
//!
//! let logger = registry.get_or_create(LoggerConfig::new("info").with_name("api"));
//! logger.e("server", "bind", "address in use", None);
//!
//! assert!(sink.stderr()[0].ends_with("[ERROR] - api - server -> bind: address in use"));
//! assert!(registry.lookup("missing").is_err());
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod payload;
pub mod registry;
pub mod severity;
pub mod sink;
pub(crate) mod utils;

pub use config::{LoggerConfig, DEFAULT_LOGGER_NAME};
pub use error::{ConfigError, LoggerError, PayloadError, RegistryError, SeverityError};
pub use logger::{compose_line, Logger};
pub use payload::Payload;
pub use registry::LoggerRegistry;
pub use severity::{Severity, SeverityInput, Stream};
pub use sink::{ConsoleSink, LogSink, MemorySink};

pub use utils::{diagnostics_layer, setup_diagnostics, severity_for, DiagnosticFormatter};
