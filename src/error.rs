//! Engine error types.
//!
//! The engine raises an error only where a missing value would silently
//! corrupt downstream state — end-orientation resolution, whose result is
//! threaded into the next beat. Every other missing-data path degrades to
//! a documented default and is reported through the `log` facade.

use thiserror::Error;

use crate::model::{MotionType, Orientation, RotationDirection, Turns};

#[derive(Debug, Error)]
pub enum EngineError {
    /// No orientation rule matched the motion. Raised rather than
    /// defaulted: a wrong end orientation corrupts the next beat's start.
    #[error(
        "no end orientation for {motion_type:?} motion with {turns} turns \
         from {start_orientation:?} ({rotation_direction:?})"
    )]
    OrientationUnresolved {
        motion_type: MotionType,
        turns: Turns,
        start_orientation: Orientation,
        rotation_direction: RotationDirection,
    },

    /// Placement-table data could not be read at all.
    #[error("placement data error: {0}")]
    PlacementData(String),

    /// Malformed JSON on the load or FFI path.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
