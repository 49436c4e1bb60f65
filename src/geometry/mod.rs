//! Geometry module - stateless joint angle math
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod body;

pub use angles::joint_angle;
pub use body::{knee_flexion_angle, torso_angle};
