//! Landmark data model and validated pose view
//!
//! Landmarks arrive from MediaPipe Pose (33 points per frame) in normalized
//! image coordinates. The analyzer only reads shoulders, hips, knees and
//! ankles, so a pose is valid as long as it covers index 28.

use super::error::{PoseError, PoseResult};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Highest index the analyzer reads, plus one
pub const MIN_LANDMARKS: usize = RIGHT_ANKLE + 1;

/// Full MediaPipe pose model size
pub const POSE_LANDMARKS: usize = 33;

/// Values per landmark in the flat JS layout (x, y, z)
pub const VALUES_PER_LANDMARK: usize = 3;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 2D landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Position as a tuple (for the geometry functions)
    pub fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// A validated single-frame pose: a borrowed landmark slice that is
/// guaranteed to cover every index the analyzer reads.
///
/// Construction fails fast on short input. Running geometry against wrong
/// indices would silently corrupt scoring, so defaults are never substituted.
#[derive(Clone, Copy, Debug)]
pub struct Pose<'a> {
    landmarks: &'a [Landmark],
}

impl<'a> Pose<'a> {
    pub fn new(landmarks: &'a [Landmark]) -> PoseResult<Self> {
        if landmarks.len() < MIN_LANDMARKS {
            return Err(PoseError::TooFewLandmarks {
                got: landmarks.len(),
            });
        }
        Ok(Self { landmarks })
    }

    /// Position of a landmark. `index` must be below `MIN_LANDMARKS`,
    /// which construction guarantees for every index in this module.
    pub fn point(&self, index: usize) -> (f32, f32) {
        self.landmarks[index].xy()
    }
}
