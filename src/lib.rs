//! Squat Web - rep counting and form scoring from pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen glue; all logic lives in submodules
//!
//! JavaScript owns the video element, the MediaPipe pose model and the
//! canvas overlay; it feeds one landmark frame per video frame through the
//! bridge and reads back counts and scores. The core below the bridge is
//! pure and runs (and tests) natively as well.

mod analyzer;
mod bridge;
mod geometry;
mod pose;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{get_final_result, get_state, process_frame, reset_session};

// Rust-side API (rlib consumers and tests)
pub use analyzer::{
    back_posture_score, depth_score, qualitative_feedback, AnalyzerState, FinalResult,
    FinalScores, RepPhase, SquatAnalyzer,
};
pub use geometry::{joint_angle, knee_flexion_angle, torso_angle};
pub use pose::{Landmark, Pose, PoseError, PoseResult};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
