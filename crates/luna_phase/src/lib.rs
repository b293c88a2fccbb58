//! Lunar phase engine: moon age, illumination, named phase and shadow
//! geometry from a civil timestamp.
//!
//! This crate provides:
//! - Julian Day and mean-cycle moon age for any calendar instant
//! - A raised-cosine illumination model
//! - An 8-way phase classifier over one shared boundary table
//! - Interpretive meanings per phase
//! - A renderer-agnostic shadow descriptor for drawing the disc
//!
//! All functions are pure; only [`moon_phase_now`] reads the wall clock.
//!
//! # Quick start
//!
//! ```rust
//! use luna_phase::{CivilTime, compute_moon_phase, meaning_for, shadow_for};
//!
//! let t: CivilTime = "2024-03-25T07:00:00".parse().unwrap();
//! let phase = compute_moon_phase(&t);
//! println!("{} {} ({:.1}% lit)", phase.symbol(), phase.name(), phase.illuminated);
//! println!("{}", meaning_for(phase.age));
//!
//! let shadow = shadow_for(&phase);
//! let clip = shadow.occlusion_rect(150.0, 150.0, 120.0);
//! assert!(clip.width >= 0.0);
//! ```

pub mod category;
pub mod constants;
pub mod phase;
pub mod shadow;

pub use category::{
    ALL_PHASES, PHASE_BOUNDARIES, PhaseBoundary, PhaseCategory, meaning_for, phase_bucket,
    phase_for_age,
};
pub use constants::{HALF_SYNODIC_MONTH_DAYS, KNOWN_NEW_MOON_JD, SYNODIC_MONTH_DAYS};
pub use phase::{
    MoonPhase, compute_moon_phase, illumination_percent, julian_day, moon_age_from_jd,
    moon_phase_from_jd, moon_phase_now,
};
pub use shadow::{OcclusionRect, ShadowDescriptor, ShadowSide, shadow_for, shadow_for_age};

// Re-export the timestamp type so callers need only this crate.
pub use luna_time::{CivilTime, TimeError};
