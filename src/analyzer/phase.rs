//! Rep phase enum and the thresholds that drive transitions
//!
//! The thresholds form hysteresis bands: a rep starts below 160° but only
//! completes back above 160°, and the 100°/120° marks sit well inside that
//! band, so angle noise near any single cutoff cannot oscillate the phase
//! or double-count a rep.

use serde::Serialize;

/// Knee angle above which the lifter counts as standing. Dropping below
/// this starts a rep; rising back to it ends one.
pub const STANDING_KNEE_ANGLE: f32 = 160.0;

/// Knee angle below which the lifter is at the bottom of the rep;
/// rising back past it begins the ascent
pub const BOTTOM_KNEE_ANGLE: f32 = 100.0;

/// A rep must dip to this knee angle at least once to be counted
pub const MIN_DEPTH_KNEE_ANGLE: f32 = 120.0;

/// A rep must span more than this many frames to be counted
/// (rejects spurious quick dips that are not genuine reps)
pub const MIN_REP_FRAMES: u32 = 5;

/// Stage of a squat rep cycle
///
/// Exactly one value is current per session; transitions happen only
/// inside the per-frame update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepPhase {
    #[default]
    Standing,
    Descending,
    Bottom,
    Ascending,
}

impl RepPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepPhase::Standing => "standing",
            RepPhase::Descending => "descending",
            RepPhase::Bottom => "bottom",
            RepPhase::Ascending => "ascending",
        }
    }

    /// True while a rep is being accumulated
    pub fn in_rep(&self) -> bool {
        !matches!(self, RepPhase::Standing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_standing() {
        assert_eq!(RepPhase::default(), RepPhase::Standing);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(RepPhase::Standing.as_str(), "standing");
        assert_eq!(RepPhase::Descending.as_str(), "descending");
        assert_eq!(RepPhase::Bottom.as_str(), "bottom");
        assert_eq!(RepPhase::Ascending.as_str(), "ascending");
    }

    #[test]
    fn test_only_standing_is_outside_a_rep() {
        assert!(!RepPhase::Standing.in_rep());
        assert!(RepPhase::Descending.in_rep());
        assert!(RepPhase::Bottom.in_rep());
        assert!(RepPhase::Ascending.in_rep());
    }
}
