//! Pose module - landmark data model and validation
//!
//! Re-exports only. All logic in submodules.

mod error;
mod landmarks;

pub use error::{PoseError, PoseResult};
pub use landmarks::{
    Landmark, Pose,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    MIN_LANDMARKS, POSE_LANDMARKS, VALUES_PER_LANDMARK,
};
