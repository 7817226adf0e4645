//! # Utilities Module
//!
//! Internal utility modules for the logger-core crate.

pub(crate) mod diagnostics;

pub use diagnostics::{diagnostics_layer, setup_diagnostics, severity_for, DiagnosticFormatter};
