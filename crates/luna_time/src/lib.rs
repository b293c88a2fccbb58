//! Civil timestamps and Julian Day conversion.
//!
//! This crate provides:
//! - `CivilTime`, calendar fields read in the caller's own zone
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - Timestamp parsing and wall-clock capture (via chrono)

pub mod civil_time;
pub mod error;
pub mod julian;

pub use civil_time::CivilTime;
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
