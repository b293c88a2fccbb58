//! The eight named moon phases and the age → phase boundary table.
//!
//! A moon age (days since new moon) falls into the first row of
//! [`PHASE_BOUNDARIES`] whose upper bound exceeds it. The last row wraps
//! back to New Moon, so New Moon covers both `[0, 1.84566)` and
//! `[27.69, synodic month)`.
//!
//! The phase classifier and the meaning lookup both go through
//! [`phase_bucket`], so they cannot disagree on an age.

use crate::constants::{
    FIRST_QUARTER_END_DAYS, FULL_MOON_END_DAYS, LAST_QUARTER_END_DAYS, NEW_MOON_END_DAYS,
    WANING_CRESCENT_END_DAYS, WANING_GIBBOUS_END_DAYS, WAXING_CRESCENT_END_DAYS,
    WAXING_GIBBOUS_END_DAYS,
};

/// The 8 moon phases in cycle order, starting from New Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseCategory {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All 8 phases in cycle order (0 = New Moon, 7 = Waning Crescent).
pub const ALL_PHASES: [PhaseCategory; 8] = [
    PhaseCategory::NewMoon,
    PhaseCategory::WaxingCrescent,
    PhaseCategory::FirstQuarter,
    PhaseCategory::WaxingGibbous,
    PhaseCategory::FullMoon,
    PhaseCategory::WaningGibbous,
    PhaseCategory::LastQuarter,
    PhaseCategory::WaningCrescent,
];

impl PhaseCategory {
    /// Display name of the phase.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Moon-phase emoji for the phase.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NewMoon => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::FullMoon => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }

    /// Interpretive (Wiccan) correspondence of the phase.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::NewMoon => "✨ New beginnings - Meditation and planning",
            Self::WaxingCrescent => "✨ Growth - Attraction and prosperity magic",
            Self::FirstQuarter => "✨ Action - Overcoming obstacles and deciding",
            Self::WaxingGibbous => "✨ Refinement - Polishing and preparing",
            Self::FullMoon => "✨ Culmination - Peak magical power",
            Self::WaningGibbous => "✨ Gratitude - Sharing and giving thanks",
            Self::LastQuarter => "✨ Release - Banishing and letting go",
            Self::WaningCrescent => "✨ Purification - Closing cycles",
        }
    }

    /// 0-based index (New Moon = 0 .. Waning Crescent = 7).
    pub const fn index(self) -> u8 {
        match self {
            Self::NewMoon => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::FullMoon => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// Phase for a 0-based index, `None` past 7.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALL_PHASES.len() {
            Some(ALL_PHASES[index as usize])
        } else {
            None
        }
    }

    /// Age (days) at which the phase begins within the cycle.
    ///
    /// New Moon also re-enters at [`WANING_CRESCENT_END_DAYS`] for the wrap.
    pub const fn lower_bound_days(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::WaxingCrescent => NEW_MOON_END_DAYS,
            Self::FirstQuarter => WAXING_CRESCENT_END_DAYS,
            Self::WaxingGibbous => FIRST_QUARTER_END_DAYS,
            Self::FullMoon => WAXING_GIBBOUS_END_DAYS,
            Self::WaningGibbous => FULL_MOON_END_DAYS,
            Self::LastQuarter => WANING_GIBBOUS_END_DAYS,
            Self::WaningCrescent => LAST_QUARTER_END_DAYS,
        }
    }

    /// All 8 phases in order.
    pub const fn all() -> &'static [PhaseCategory; 8] {
        &ALL_PHASES
    }
}

impl std::fmt::Display for PhaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the classification table: ages strictly below `upper_days`
/// (and not claimed by an earlier row) belong to `phase`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseBoundary {
    pub upper_days: f64,
    pub phase: PhaseCategory,
}

const fn boundary(upper_days: f64, phase: PhaseCategory) -> PhaseBoundary {
    PhaseBoundary { upper_days, phase }
}

/// Ascending classification table shared by every age-based lookup.
///
/// The final row has no upper bound and wraps to New Moon.
pub const PHASE_BOUNDARIES: [PhaseBoundary; 9] = [
    boundary(NEW_MOON_END_DAYS, PhaseCategory::NewMoon),
    boundary(WAXING_CRESCENT_END_DAYS, PhaseCategory::WaxingCrescent),
    boundary(FIRST_QUARTER_END_DAYS, PhaseCategory::FirstQuarter),
    boundary(WAXING_GIBBOUS_END_DAYS, PhaseCategory::WaxingGibbous),
    boundary(FULL_MOON_END_DAYS, PhaseCategory::FullMoon),
    boundary(WANING_GIBBOUS_END_DAYS, PhaseCategory::WaningGibbous),
    boundary(LAST_QUARTER_END_DAYS, PhaseCategory::LastQuarter),
    boundary(WANING_CRESCENT_END_DAYS, PhaseCategory::WaningCrescent),
    boundary(f64::INFINITY, PhaseCategory::NewMoon),
];

/// Row of [`PHASE_BOUNDARIES`] that `age_days` falls into (0..=8).
///
/// Negative ages land in row 0; ages past 27.69 and NaN land in the wrap row.
pub fn phase_bucket(age_days: f64) -> usize {
    PHASE_BOUNDARIES
        .iter()
        .position(|b| age_days < b.upper_days)
        .unwrap_or(PHASE_BOUNDARIES.len() - 1)
}

/// Classify a moon age (days since new moon) into one of the 8 phases.
pub fn phase_for_age(age_days: f64) -> PhaseCategory {
    PHASE_BOUNDARIES[phase_bucket(age_days)].phase
}

/// Interpretive meaning for a moon age, using the same table as
/// [`phase_for_age`].
pub fn meaning_for(age_days: f64) -> &'static str {
    phase_for_age(age_days).meaning()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SYNODIC_MONTH_DAYS;

    #[test]
    fn index_roundtrip() {
        for (i, p) in ALL_PHASES.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
            assert_eq!(PhaseCategory::from_index(i as u8), Some(*p));
        }
        assert_eq!(PhaseCategory::from_index(8), None);
    }

    #[test]
    fn symbols_are_distinct() {
        for a in ALL_PHASES {
            for b in ALL_PHASES {
                if a != b {
                    assert_ne!(a.symbol(), b.symbol());
                    assert_ne!(a.name(), b.name());
                    assert_ne!(a.meaning(), b.meaning());
                }
            }
        }
    }

    #[test]
    fn table_is_strictly_ascending() {
        for pair in PHASE_BOUNDARIES.windows(2) {
            assert!(pair[0].upper_days < pair[1].upper_days);
        }
    }

    #[test]
    fn table_rows_follow_cycle_order() {
        for (i, row) in PHASE_BOUNDARIES.iter().take(8).enumerate() {
            assert_eq!(row.phase.index() as usize, i);
        }
        assert_eq!(PHASE_BOUNDARIES[8].phase, PhaseCategory::NewMoon);
    }

    #[test]
    fn lower_bound_matches_previous_row() {
        assert_eq!(PhaseCategory::NewMoon.lower_bound_days(), 0.0);
        for pair in PHASE_BOUNDARIES.windows(2).take(7) {
            assert_eq!(pair[1].phase.lower_bound_days(), pair[0].upper_days);
        }
    }

    #[test]
    fn lower_bound_classifies_into_own_phase() {
        for p in ALL_PHASES {
            assert_eq!(phase_for_age(p.lower_bound_days()), p, "{p}");
        }
    }

    #[test]
    fn wrap_region_is_new_moon() {
        assert_eq!(phase_for_age(27.69), PhaseCategory::NewMoon);
        assert_eq!(phase_for_age(SYNODIC_MONTH_DAYS - 1e-9), PhaseCategory::NewMoon);
        assert_eq!(phase_bucket(28.0), 8);
    }

    #[test]
    fn out_of_cycle_ages() {
        assert_eq!(phase_for_age(-3.0), PhaseCategory::NewMoon);
        assert_eq!(phase_bucket(-3.0), 0);
        assert_eq!(phase_for_age(100.0), PhaseCategory::NewMoon);
        assert_eq!(phase_bucket(f64::NAN), 8);
    }

    #[test]
    fn meaning_follows_phase() {
        assert_eq!(meaning_for(0.5), PhaseCategory::NewMoon.meaning());
        assert_eq!(meaning_for(14.0), PhaseCategory::FullMoon.meaning());
        assert_eq!(meaning_for(21.0), PhaseCategory::LastQuarter.meaning());
        assert_eq!(meaning_for(29.0), PhaseCategory::NewMoon.meaning());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(PhaseCategory::FirstQuarter.to_string(), "First Quarter");
    }
}
