use crate::logger::compose_line;
use crate::severity::Severity;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields, MakeWriter},
    prelude::*,
    registry::LookupSpan,
    EnvFilter, Layer,
};

/// Installs the global `tracing` subscriber for the crate's own diagnostics.
///
/// Events are rendered on stderr in the same layout as logger records and
/// filtered with the logger's ordering (`INFO < DEBUG < WARN < ERROR`).
/// `RUST_LOG`, when set, narrows targets further.
pub fn setup_diagnostics(threshold: Severity) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(diagnostics_layer(threshold, std::io::stderr))
        .try_init()
        .context("Failed to set global subscriber")?;

    Ok(())
}

/// Formatting layer writing to `make_writer`, dropping events below
/// `threshold`.
pub fn diagnostics_layer<S, W>(threshold: Severity, make_writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .event_format(DiagnosticFormatter)
        .with_filter(filter_fn(move |meta| {
            severity_for(meta.level()) >= threshold
        }))
}

/// Maps a tracing level onto the logger's severities; TRACE folds into DEBUG.
pub fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warn,
        Level::INFO => Severity::Info,
        _ => Severity::Debug,
    }
}

// --- Formatter ---

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

pub struct DiagnosticFormatter;

impl<S, N> FormatEvent<S, N> for DiagnosticFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let mut message = visitor.message;
        if !visitor.fields.is_empty() {
            if !message.is_empty() {
                message.push(' ');
            }
            message.push_str(&visitor.fields.join(" "));
        }

        let line = compose_line(
            Utc::now(),
            severity_for(metadata.level()),
            None,
            metadata.target(),
            "",
            &message,
        );
        writeln!(writer, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::prelude::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_severity_for_levels() {
        assert_eq!(severity_for(&Level::TRACE), Severity::Debug);
        assert_eq!(severity_for(&Level::DEBUG), Severity::Debug);
        assert_eq!(severity_for(&Level::INFO), Severity::Info);
        assert_eq!(severity_for(&Level::WARN), Severity::Warn);
        assert_eq!(severity_for(&Level::ERROR), Severity::Error);
    }

    #[test]
    fn test_layer_formats_and_filters() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::registry()
            .with(diagnostics_layer(Severity::Debug, move || writer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "registry", "hidden at debug threshold");
            tracing::debug!(target: "registry", "pool ready");
            tracing::error!(target: "sink", code = 7, "write failed");
        });

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - [DEBUG] - registry: pool ready"));
        assert!(lines[1].ends_with(" - [ERROR] - sink: write failed code=7"));
    }
}
