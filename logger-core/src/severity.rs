//! # Severity Levels
//!
//! The four ordered severities plus the string/enum coercion used at every
//! entry point that accepts a threshold or a record level.

use crate::error::SeverityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output stream a record is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Ordered log severity. `Info < Debug < Warn < Error`.
///
/// The integer values are part of the public contract so external callers
/// can pass explicit numeric thresholds through [`Severity::try_from`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
#[repr(u8)]
pub enum Severity {
    Info = 0,
    Debug = 1,
    #[default]
    Warn = 2,
    Error = 3,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Debug,
        Severity::Warn,
        Severity::Error,
    ];

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Upper-case display name used in the `[LEVEL]` segment.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// INFO and DEBUG go to stdout, WARN and ERROR to stderr.
    pub const fn stream(self) -> Stream {
        match self {
            Severity::Info | Severity::Debug => Stream::Stdout,
            Severity::Warn | Severity::Error => Stream::Stderr,
        }
    }

    /// Normalizes a free-form level name.
    ///
    /// Matching is case-insensitive and `WARNING` is accepted for `WARN`.
    /// Anything unrecognized degrades to [`Severity::Error`], the most
    /// restrictive level.
    pub fn from_name(name: &str) -> Severity {
        let upper = name.trim().to_ascii_uppercase();
        let token = if upper == "WARNING" { "WARN" } else { upper.as_str() };

        Severity::ALL
            .into_iter()
            .find(|s| s.as_str() == token)
            .unwrap_or(Severity::Error)
    }

    /// Display name for a raw numeric value; `UNKNOWN` when it has none.
    pub fn name_of(value: i64) -> &'static str {
        Severity::try_from(value)
            .map(Severity::as_str)
            .unwrap_or("UNKNOWN")
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::from_name(s))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

impl TryFrom<i64> for Severity {
    type Error = SeverityError;

    fn try_from(value: i64) -> Result<Self, SeverityError> {
        match value {
            0 => Ok(Severity::Info),
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Warn),
            3 => Ok(Severity::Error),
            _ => Err(SeverityError::OutOfRange { value }),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = SeverityError;

    fn try_from(value: u8) -> Result<Self, SeverityError> {
        Severity::try_from(i64::from(value))
    }
}

/// A severity as supplied by a caller: either already typed or a name that
/// still needs normalizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeverityInput {
    Level(Severity),
    Name(String),
}

impl SeverityInput {
    /// Parses raw text such as a CLI flag or environment value.
    ///
    /// Integers must be in `0..=3` and become [`SeverityInput::Level`];
    /// anything else is kept as a name for [`Severity::from_name`].
    pub fn parse(raw: &str) -> Result<SeverityInput, SeverityError> {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(value) => Severity::try_from(value).map(SeverityInput::Level),
            Err(_) => Ok(SeverityInput::Name(raw.to_string())),
        }
    }

    /// Resolves the input to a concrete severity. Names follow
    /// [`Severity::from_name`].
    pub fn resolve(&self) -> Severity {
        match self {
            SeverityInput::Level(severity) => *severity,
            SeverityInput::Name(name) => Severity::from_name(name),
        }
    }
}

impl Default for SeverityInput {
    fn default() -> Self {
        SeverityInput::Level(Severity::default())
    }
}

impl From<Severity> for SeverityInput {
    fn from(severity: Severity) -> Self {
        SeverityInput::Level(severity)
    }
}

impl From<&str> for SeverityInput {
    fn from(name: &str) -> Self {
        SeverityInput::Name(name.to_string())
    }
}

impl From<String> for SeverityInput {
    fn from(name: String) -> Self {
        SeverityInput::Name(name)
    }
}
