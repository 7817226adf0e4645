//! # Output Sinks
//!
//! Destinations for composed log lines. The console sink is the default;
//! the memory sink captures lines together with the stream they were routed
//! to.

use crate::severity::Stream;
use std::fmt::Debug;
use std::io::{self, Write};
use std::sync::Mutex;

/// Receives the lines of one record, already routed to a stream.
pub trait LogSink: Send + Sync + Debug {
    /// Writes every line of a single record, newline-terminated, then
    /// flushes.
    fn write_lines(&self, stream: Stream, lines: &[&str]) -> io::Result<()>;
}

/// Writes to the process's standard output and standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    fn emit<W: Write>(mut writer: W, lines: &[&str]) -> io::Result<()> {
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

impl LogSink for ConsoleSink {
    fn write_lines(&self, stream: Stream, lines: &[&str]) -> io::Result<()> {
        match stream {
            Stream::Stdout => Self::emit(io::stdout().lock(), lines),
            Stream::Stderr => Self::emit(io::stderr().lock(), lines),
        }
    }
}

/// In-memory sink recording `(stream, line)` pairs in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Stream, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line with its stream, oldest first.
    pub fn records(&self) -> Vec<(Stream, String)> {
        self.lock().clone()
    }

    /// Lines written to the given stream, oldest first.
    pub fn lines_for(&self, stream: Stream) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.lines_for(Stream::Stdout)
    }

    pub fn stderr(&self) -> Vec<String> {
        self.lines_for(Stream::Stderr)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A poisoned lock still holds valid lines; keep capturing.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Stream, String)>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn write_lines(&self, stream: Stream, lines: &[&str]) -> io::Result<()> {
        let mut captured = self.lock();
        captured.extend(lines.iter().map(|line| (stream, line.to_string())));
        Ok(())
    }
}
