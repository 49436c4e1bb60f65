//! Analyzer module - rep detection state machine and form scoring
//!
//! Re-exports only. All logic in submodules.

mod phase;
mod scoring;
mod session;

pub use phase::{RepPhase, BOTTOM_KNEE_ANGLE, MIN_DEPTH_KNEE_ANGLE, MIN_REP_FRAMES, STANDING_KNEE_ANGLE};
pub use scoring::{back_posture_score, depth_score, qualitative_feedback, FinalScores};
pub use session::{AnalyzerState, FinalResult, SquatAnalyzer};
