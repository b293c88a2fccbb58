//! Renderer-agnostic shadow geometry for drawing the moon disc.
//!
//! The shadow is described as a clip rectangle intersected with the disc.
//! The terminator's horizontal position is `cos(2π · age / synodic month)`
//! in units of the disc radius, measured from the disc centre. Waxing ages
//! shade from the left edge up to the terminator; waning ages shade from
//! the terminator to the right edge.

use std::f64::consts::TAU;

use crate::constants::{HALF_SYNODIC_MONTH_DAYS, SYNODIC_MONTH_DAYS};
use crate::phase::MoonPhase;

/// Which half of the disc the shadow rectangle is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShadowSide {
    /// Shadow grows from the left edge (first half of the cycle).
    LeftOccluded,
    /// Shadow grows toward the right edge (second half of the cycle).
    RightOccluded,
}

impl ShadowSide {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftOccluded => "left",
            Self::RightOccluded => "right",
        }
    }
}

/// Shadow shape for one moon age.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowDescriptor {
    pub side: ShadowSide,
    /// Terminator offset from the disc centre, in radii, in `[-1, 1]`.
    pub offset_fraction: f64,
}

/// Axis-aligned clip rectangle in the renderer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OcclusionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ShadowDescriptor {
    /// Width of the shadow rectangle in radii, in `[0, 2]`.
    pub fn shadow_width_fraction(&self) -> f64 {
        match self.side {
            ShadowSide::LeftOccluded => 1.0 + self.offset_fraction,
            ShadowSide::RightOccluded => 1.0 - self.offset_fraction,
        }
    }

    /// Clip rectangle for a disc of `radius` centred at `(center_x, center_y)`.
    ///
    /// Fill the disc clipped to this rectangle with the shadow colour.
    pub fn occlusion_rect(&self, center_x: f64, center_y: f64, radius: f64) -> OcclusionRect {
        let x = match self.side {
            ShadowSide::LeftOccluded => center_x - radius,
            ShadowSide::RightOccluded => center_x + self.offset_fraction * radius,
        };
        OcclusionRect {
            x,
            y: center_y - radius,
            width: radius * self.shadow_width_fraction(),
            height: 2.0 * radius,
        }
    }
}

/// Shadow geometry for a moon age in days.
pub fn shadow_for_age(age_days: f64) -> ShadowDescriptor {
    let angle = age_days / SYNODIC_MONTH_DAYS * TAU;
    let side = if age_days < HALF_SYNODIC_MONTH_DAYS {
        ShadowSide::LeftOccluded
    } else {
        ShadowSide::RightOccluded
    };
    ShadowDescriptor {
        side,
        offset_fraction: angle.cos(),
    }
}

/// Shadow geometry for a computed moon phase.
pub fn shadow_for(phase: &MoonPhase) -> ShadowDescriptor {
    shadow_for_age(phase.age)
}
