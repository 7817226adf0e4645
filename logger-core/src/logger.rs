//! # Leveled Logger
//!
//! Formats tagged, timestamped lines and routes them to stdout or stderr by
//! severity. Records below the configured threshold are dropped without any
//! side effect.
//!
//! Line layout:
//!
//! ```text
//! <timestamp> - [<LEVEL>] - [<name> - ]<file>[ -> <method>][: <message>]
//! \t<payload>
//! ```

use crate::config::LoggerConfig;
use crate::payload::Payload;
use crate::severity::{Severity, SeverityInput};
use crate::sink::{ConsoleSink, LogSink};
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Logger {
    threshold: Severity,
    name: Option<String>,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Creates a logger writing to the console.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, Arc::new(ConsoleSink))
    }

    /// Creates a logger writing to `sink`.
    pub fn with_sink(config: LoggerConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            threshold: config.resolved_threshold(),
            name: config.name,
            sink,
        }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether a record at `severity` would be emitted.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    /// Writes at INFO.
    pub fn i(&self, file: &str, method: &str, message: &str, output: Option<Payload>) {
        self.emit(Severity::Info, file, method, message, output.as_ref());
    }

    /// Writes at DEBUG.
    pub fn d(&self, file: &str, method: &str, message: &str, output: Option<Payload>) {
        self.emit(Severity::Debug, file, method, message, output.as_ref());
    }

    /// Writes at WARN.
    pub fn w(&self, file: &str, method: &str, message: &str, output: Option<Payload>) {
        self.emit(Severity::Warn, file, method, message, output.as_ref());
    }

    /// Writes at ERROR.
    pub fn e(&self, file: &str, method: &str, message: &str, output: Option<Payload>) {
        self.emit(Severity::Error, file, method, message, output.as_ref());
    }

    /// Writes one record at `severity`, which may be a [`Severity`] or a
    /// level name (normalized like the threshold).
    ///
    /// `method` and `message` are omitted from the line when empty. The
    /// payload, when present, goes on a second tab-indented line on the same
    /// stream.
    pub fn write(
        &self,
        severity: impl Into<SeverityInput>,
        file: &str,
        method: &str,
        message: &str,
        output: Option<Payload>,
    ) {
        let severity = severity.into().resolve();
        self.emit(severity, file, method, message, output.as_ref());
    }

    /// Composes the record line for `severity` at the given instant.
    pub fn format_line(
        &self,
        at: DateTime<Utc>,
        severity: Severity,
        file: &str,
        method: &str,
        message: &str,
    ) -> String {
        compose_line(at, severity, self.name(), file, method, message)
    }

    fn emit(
        &self,
        severity: Severity,
        file: &str,
        method: &str,
        message: &str,
        output: Option<&Payload>,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let line = self.format_line(Utc::now(), severity, file, method, message);
        let payload_line = output
            .filter(|payload| payload.is_present())
            .map(|payload| format!("\t{}", payload.render()));

        let result = match &payload_line {
            Some(extra) => self
                .sink
                .write_lines(severity.stream(), &[line.as_str(), extra.as_str()]),
            None => self.sink.write_lines(severity.stream(), &[line.as_str()]),
        };

        if let Err(e) = result {
            debug!("Log sink write failed for {}: {}", file, e);
        }
    }
}

/// Builds one record line. Empty `method` and `message` segments are left
/// out; `name`, when present, precedes the file tag.
pub fn compose_line(
    at: DateTime<Utc>,
    severity: Severity,
    name: Option<&str>,
    file: &str,
    method: &str,
    message: &str,
) -> String {
    let mut line = format!(
        "{} - [{}] - ",
        at.to_rfc3339_opts(SecondsFormat::Millis, true),
        severity
    );
    if let Some(name) = name {
        line.push_str(name);
        line.push_str(" - ");
    }
    line.push_str(file);
    if !method.is_empty() {
        line.push_str(" -> ");
        line.push_str(method);
    }
    if !message.is_empty() {
        line.push_str(": ");
        line.push_str(message);
    }
    line
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}
