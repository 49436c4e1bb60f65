//! Squat session state machine
//!
//! One `SquatAnalyzer` per analysis session. Fed one frame at a time, in
//! timestamp order, by whatever drives the video; it never performs I/O.
//! Tracks the rep phase, accumulates per-frame form scores while a rep is
//! in progress, and records the single deepest moment of the whole stream.

use serde::Serialize;

use crate::geometry::{knee_flexion_angle, torso_angle};
use crate::pose::Pose;

use super::phase::{
    RepPhase, BOTTOM_KNEE_ANGLE, MIN_DEPTH_KNEE_ANGLE, MIN_REP_FRAMES, STANDING_KNEE_ANGLE,
};
use super::scoring::{back_posture_score, depth_score, qualitative_feedback, FinalScores};

/// Live snapshot of the session (for on-screen display)
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AnalyzerState {
    pub squat_count: u32,
    pub phase: RepPhase,
    pub frame_count: u32,
    pub total_depth: f32,
    pub total_back_posture: f32,
    pub lowest_knee_angle: f32,
}

/// End-of-session outcome
///
/// The scores average the most recent rep's frames only: the accumulators
/// reset when each rep starts, so earlier reps do not feed the average.
/// That matches the product's "grade the last attempt" behavior.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FinalResult {
    Scored {
        squat_count: u32,
        scores: FinalScores,
        feedback: &'static str,
        /// Deepest knee angle seen anywhere in the stream
        lowest_knee_angle: f32,
        /// Media timestamp of that deepest moment, in seconds
        best_moment_time: f64,
    },
    NoReps,
}

/// Rep counter and form scorer for one squat session
pub struct SquatAnalyzer {
    squat_count: u32,
    phase: RepPhase,
    /// Frames observed during the current in-progress rep
    frame_count: u32,
    /// Running per-frame score sums for the current in-progress rep
    total_depth: f32,
    total_back_posture: f32,
    /// Sticky within a rep: set once the knee dips to the minimum depth,
    /// cleared when the next rep starts
    rep_reached_min_depth: bool,
    /// Deepest knee angle across the whole stream, independent of phase
    lowest_knee_angle: f32,
    best_moment_time: f64,
}

impl SquatAnalyzer {
    pub fn new() -> Self {
        Self {
            squat_count: 0,
            phase: RepPhase::Standing,
            frame_count: 0,
            total_depth: 0.0,
            total_back_posture: 0.0,
            rep_reached_min_depth: false,
            lowest_knee_angle: 180.0,
            best_moment_time: 0.0,
        }
    }

    /// Reinitialize every field; required before starting a new stream
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Process one frame observation
    ///
    /// `pose` is `None` when no person was detected; that frame advances
    /// no state. Timestamps must be strictly increasing across calls.
    pub fn analyze(&mut self, timestamp: f64, pose: Option<&Pose>) {
        let pose = match pose {
            Some(pose) => pose,
            None => return,
        };

        let knee_angle = knee_flexion_angle(pose);
        if knee_angle < self.lowest_knee_angle {
            self.lowest_knee_angle = knee_angle;
            self.best_moment_time = timestamp;
        }

        let torso = torso_angle(pose);
        let depth = depth_score(knee_angle);
        let back = back_posture_score(torso);

        // Sticky flag first: a rep-start transition below clears it, so a
        // dip straight from standing past 120° does not pre-arm the new rep
        if knee_angle <= MIN_DEPTH_KNEE_ANGLE {
            self.rep_reached_min_depth = true;
        }

        self.step_phase(knee_angle);

        if self.phase.in_rep() {
            self.frame_count += 1;
            self.total_depth += depth;
            self.total_back_posture += back;
        }
    }

    /// Priority-ordered transition rules; at most one fires per frame
    fn step_phase(&mut self, knee_angle: f32) {
        match self.phase {
            RepPhase::Standing if knee_angle < STANDING_KNEE_ANGLE => {
                // New rep begins: clear the accumulators together
                self.phase = RepPhase::Descending;
                self.rep_reached_min_depth = false;
                self.frame_count = 0;
                self.total_depth = 0.0;
                self.total_back_posture = 0.0;
            }
            RepPhase::Descending if knee_angle < BOTTOM_KNEE_ANGLE => {
                self.phase = RepPhase::Bottom;
            }
            RepPhase::Bottom | RepPhase::Descending
                if (BOTTOM_KNEE_ANGLE..STANDING_KNEE_ANGLE).contains(&knee_angle) =>
            {
                self.phase = RepPhase::Ascending;
            }
            RepPhase::Ascending if knee_angle >= STANDING_KNEE_ANGLE => {
                if self.rep_reached_min_depth && self.frame_count > MIN_REP_FRAMES {
                    self.squat_count += 1;
                }
                self.phase = RepPhase::Standing;
            }
            _ => {}
        }
    }

    /// Live snapshot for display
    pub fn state(&self) -> AnalyzerState {
        AnalyzerState {
            squat_count: self.squat_count,
            phase: self.phase,
            frame_count: self.frame_count,
            total_depth: self.total_depth,
            total_back_posture: self.total_back_posture,
            lowest_knee_angle: self.lowest_knee_angle,
        }
    }

    /// Aggregate result at end of stream
    pub fn final_result(&self) -> FinalResult {
        if self.squat_count == 0 || self.frame_count == 0 {
            return FinalResult::NoReps;
        }

        let depth = (self.total_depth / self.frame_count as f32).round() as i32;
        let back_posture = (self.total_back_posture / self.frame_count as f32).round() as i32;
        let total = ((depth + back_posture) as f32 / 2.0).round() as i32;

        FinalResult::Scored {
            squat_count: self.squat_count,
            scores: FinalScores {
                depth,
                back_posture,
                total,
            },
            feedback: qualitative_feedback(total),
            lowest_knee_angle: self.lowest_knee_angle,
            best_moment_time: self.best_moment_time,
        }
    }

    pub fn squat_count(&self) -> u32 {
        self.squat_count
    }

    pub fn phase(&self) -> RepPhase {
        self.phase
    }

    pub fn lowest_knee_angle(&self) -> f32 {
        self.lowest_knee_angle
    }

    pub fn best_moment_time(&self) -> f64 {
        self.best_moment_time
    }
}

impl Default for SquatAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
