//! Analysis session bridge
//!
//! Receives MediaPipe pose landmarks from JavaScript once per video frame
//! and drives the session-scoped analyzer. The pose model, video playback
//! and rendering all stay in JS; this boundary only ever sees the flat
//! landmark array and the media timestamp.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::analyzer::SquatAnalyzer;
use crate::pose::{Landmark, Pose, PoseError, PoseResult, VALUES_PER_LANDMARK};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<SquatAnalyzer> = RefCell::new(SquatAnalyzer::new());
}

/// Parse the flat Float32Array layout MediaPipe hands over
/// (x, y, z per landmark; z is dropped, the analysis is 2D)
fn parse_landmarks(data: &[f32]) -> PoseResult<Vec<Landmark>> {
    if data.len() % VALUES_PER_LANDMARK != 0 {
        return Err(PoseError::MalformedBuffer { len: data.len() });
    }
    Ok(data
        .chunks_exact(VALUES_PER_LANDMARK)
        .map(|chunk| Landmark::new(chunk[0], chunk[1]))
        .collect())
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per frame with the media timestamp (seconds)
/// and the detected landmarks as a flat Float32Array (33 × 3 values).
///
/// An empty array means no person was detected this frame; state is left
/// untouched. A present-but-short or misaligned buffer is an error the
/// caller must see, not something to paper over with defaults.
#[wasm_bindgen]
pub fn process_frame(timestamp: f64, data: &[f32]) -> Result<(), JsValue> {
    if data.is_empty() {
        return Ok(());
    }

    let landmarks = parse_landmarks(data).map_err(warn_and_convert)?;
    let pose = Pose::new(&landmarks).map_err(warn_and_convert)?;

    SESSION.with(|session_cell| {
        session_cell.borrow_mut().analyze(timestamp, Some(&pose));
    });
    Ok(())
}

fn warn_and_convert(err: PoseError) -> JsValue {
    web_sys::console::warn_1(&format!("Rejected pose frame: {}", err).into());
    JsValue::from_str(&err.to_string())
}

/// Live session snapshot as JSON (squat count, phase, running sums),
/// for the on-screen counter while the video plays.
#[wasm_bindgen]
pub fn get_state() -> String {
    SESSION.with(|session_cell| {
        serde_json::to_string(&session_cell.borrow().state()).unwrap_or_default()
    })
}

/// Final aggregate result as JSON: either the scored outcome with the
/// coaching message, or `{"outcome":"no_reps"}` when nothing was counted.
#[wasm_bindgen]
pub fn get_final_result() -> String {
    SESSION.with(|session_cell| {
        serde_json::to_string(&session_cell.borrow().final_result()).unwrap_or_default()
    })
}

/// Reinitialize the session; must be called before analyzing a new video
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|session_cell| {
        session_cell.borrow_mut().reset();
    });
    web_sys::console::log_1(&"Squat session reset".into());
}
