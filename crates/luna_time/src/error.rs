//! Error types for civil-time parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing a civil timestamp.
///
/// Julian Day conversion itself never fails; only turning text into a
/// [`CivilTime`](crate::CivilTime) can.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Text did not match any accepted timestamp layout.
    Parse(String),
    /// A field parsed as a number but is not finite (`NaN`, `inf`).
    NonFinite(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "timestamp parse error: {msg}"),
            Self::NonFinite(field) => write!(f, "{field} must be a finite number"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<std::num::ParseFloatError> for TimeError {
    fn from(e: std::num::ParseFloatError) -> Self {
        Self::Parse(e.to_string())
    }
}
