//! Process-wide astronomical constants for the mean-cycle lunar model.
//!
//! The phase boundaries are empirical (not exact eighths of the synodic
//! month). They are consumed only through
//! [`PHASE_BOUNDARIES`](crate::category::PHASE_BOUNDARIES).

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Half a synodic month: the model's full-moon instant.
pub const HALF_SYNODIC_MONTH_DAYS: f64 = SYNODIC_MONTH_DAYS / 2.0;

/// Julian Day of a reference new moon (2000-01-06 00:00).
pub const KNOWN_NEW_MOON_JD: f64 = 2_451_549.5;

// Age (days) at which each phase ends; strict upper bounds.
pub const NEW_MOON_END_DAYS: f64 = 1.845_66;
pub const WAXING_CRESCENT_END_DAYS: f64 = 5.53;
pub const FIRST_QUARTER_END_DAYS: f64 = 7.382_64;
pub const WAXING_GIBBOUS_END_DAYS: f64 = 12.91;
pub const FULL_MOON_END_DAYS: f64 = 14.765_29;
pub const WANING_GIBBOUS_END_DAYS: f64 = 20.30;
pub const LAST_QUARTER_END_DAYS: f64 = 22.147_94;
pub const WANING_CRESCENT_END_DAYS: f64 = 27.69;
