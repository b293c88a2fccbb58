//! Moon age, illumination and phase from a civil timestamp.
//!
//! The model is a fixed-period cycle anchored at a known new moon:
//! age is the Julian Day offset from that anchor folded into one synodic
//! month, and illumination is a raised cosine of that age. It is accurate
//! to within about a day of the true phase, not to ephemeris grade.

use std::f64::consts::TAU;

use luna_time::CivilTime;

use crate::category::{PhaseCategory, meaning_for, phase_for_age};
use crate::constants::{KNOWN_NEW_MOON_JD, SYNODIC_MONTH_DAYS};

/// Moon phase at one instant. Computed fresh per request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPhase {
    /// Julian Day the phase was computed for.
    pub julian_day: f64,
    /// Days since the last new moon, in `[0, SYNODIC_MONTH_DAYS)`.
    pub age: f64,
    /// Percent of the disc illuminated, in `[0, 100]`.
    pub illuminated: f64,
    /// Named phase (carries name and symbol).
    pub phase: PhaseCategory,
}

impl MoonPhase {
    /// Phase name, e.g. `"Waxing Gibbous"`.
    pub const fn name(&self) -> &'static str {
        self.phase.name()
    }

    /// Phase emoji, e.g. `"🌔"`.
    pub const fn symbol(&self) -> &'static str {
        self.phase.symbol()
    }

    /// Interpretive meaning for this phase's age.
    pub fn meaning(&self) -> &'static str {
        meaning_for(self.age)
    }

    /// Age as a fraction of the synodic month, in `[0, 1)`.
    pub fn cycle_fraction(&self) -> f64 {
        self.age / SYNODIC_MONTH_DAYS
    }
}

/// Continuous Julian Day of a civil timestamp.
///
/// Calendar fields are taken as given; invalid ones (month 13, day 40)
/// produce a finite but meaningless value.
pub fn julian_day(t: &CivilTime) -> f64 {
    t.julian_day()
}

/// Fold a day count into `[0, SYNODIC_MONTH_DAYS)`.
fn normalize_age(days: f64) -> f64 {
    let r = days % SYNODIC_MONTH_DAYS;
    let r = if r < 0.0 { r + SYNODIC_MONTH_DAYS } else { r };
    // A tiny negative remainder can round up to exactly one period.
    if r >= SYNODIC_MONTH_DAYS { 0.0 } else { r }
}

/// Moon age (days since the most recent mean new moon) at a Julian Day.
pub fn moon_age_from_jd(jd: f64) -> f64 {
    normalize_age(jd - KNOWN_NEW_MOON_JD)
}

/// Percent of the disc lit at a given moon age.
///
/// 0 at new moon, 100 at half a synodic month, symmetric in between.
pub fn illumination_percent(age_days: f64) -> f64 {
    (1.0 - (TAU * age_days / SYNODIC_MONTH_DAYS).cos()) / 2.0 * 100.0
}

/// Moon phase at a Julian Day.
pub fn moon_phase_from_jd(jd: f64) -> MoonPhase {
    let age = moon_age_from_jd(jd);
    let illuminated = illumination_percent(age);
    let phase = phase_for_age(age);
    log::trace!("jd={jd:.6} age={age:.4}d illuminated={illuminated:.2}% phase={phase}");
    MoonPhase {
        julian_day: jd,
        age,
        illuminated,
        phase,
    }
}

/// Moon phase at a civil timestamp.
pub fn compute_moon_phase(t: &CivilTime) -> MoonPhase {
    moon_phase_from_jd(julian_day(t))
}

/// Moon phase at the current local wall-clock time.
pub fn moon_phase_now() -> MoonPhase {
    let now = CivilTime::now_local();
    log::debug!("computing moon phase for local time {now}");
    compute_moon_phase(&now)
}
