//! Error types for pose input validation
//!
//! Structural problems with incoming landmark data are surfaced to the
//! caller immediately. Numeric edge cases (degenerate joint vectors) are
//! absorbed inside the geometry module and never reach this enum.

use thiserror::Error;

use super::landmarks::{MIN_LANDMARKS, VALUES_PER_LANDMARK};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoseError {
    #[error("pose has {got} landmarks, need at least {min}", min = MIN_LANDMARKS)]
    TooFewLandmarks { got: usize },

    #[error("landmark buffer length {len} is not a multiple of {stride}", stride = VALUES_PER_LANDMARK)]
    MalformedBuffer { len: usize },
}

pub type PoseResult<T> = Result<T, PoseError>;
