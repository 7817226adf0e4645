//! # Logger Registry
//!
//! Name-keyed store of shared [`Logger`] instances, owned by the application
//! rather than living in a process global. At most one logger exists per
//! name; the mutex covers the whole lookup-then-insert so concurrent callers
//! requesting the same name all receive the same instance.

use crate::config::LoggerConfig;
use crate::error::RegistryError;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::sink::{ConsoleSink, LogSink};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

const REGISTRY_TAG: &str = "LoggerRegistry";

#[derive(Debug)]
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    sink: Arc<dyn LogSink>,
}

impl LoggerRegistry {
    /// Creates an empty registry whose loggers write to the console.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(ConsoleSink))
    }

    /// Creates an empty registry whose loggers, and its own conflict
    /// warnings, write to `sink`.
    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            loggers: Mutex::new(HashMap::new()),
            sink,
        }
    }

    /// Returns the logger registered under the config's name, creating it
    /// when absent. Names default to `"Logger"`.
    ///
    /// An existing logger keeps its threshold. If the requested threshold
    /// differs, a warning goes to stderr and the existing instance is still
    /// returned.
    pub fn get_or_create(&self, config: LoggerConfig) -> Arc<Logger> {
        let name = config.registry_name().to_string();
        let requested = config.resolved_threshold();
        let mut loggers = self.lock();

        if let Some(existing) = loggers.get(&name) {
            let existing = Arc::clone(existing);
            drop(loggers);
            if existing.threshold() != requested {
                self.report_conflict(&name, existing.threshold(), requested);
            }
            return existing;
        }

        let logger = Arc::new(Logger::with_sink(
            LoggerConfig {
                name: Some(name.clone()),
                ..config
            },
            Arc::clone(&self.sink),
        ));
        loggers.insert(name.clone(), Arc::clone(&logger));
        debug!("Registered logger '{}' at {}", name, requested);
        logger
    }

    /// Returns the logger registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<Logger>, RegistryError> {
        self.lock()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn report_conflict(&self, name: &str, existing: Severity, requested: Severity) {
        warn!(
            "Logger '{}' already registered at {}; requested {} ignored",
            name, existing, requested
        );

        let notice = Logger::with_sink(LoggerConfig::new(Severity::Warn), Arc::clone(&self.sink));
        notice.w(
            REGISTRY_TAG,
            "get_or_create",
            &format!(
                "logger '{}' already exists with threshold {}, requested {} ignored",
                name, existing, requested
            ),
            None,
        );
    }

    // Inserts are single statements, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
