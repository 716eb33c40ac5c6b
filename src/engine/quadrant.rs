//! Quadrant classification — which of the four mirrored placement
//! variants applies at a given arrow location.

use log::warn;

use crate::model::{Location, MotionData};

/// Quadrant index for a motion's arrow at `location`, always in 0..=3.
///
/// The grid mode used here is local to this lookup and independent of the
/// pictograph's own mode: DIAMOND when either motion endpoint is
/// intercardinal, BOX otherwise. Shift arrows land in the opposite
/// location class from their endpoints, static/dash arrows in the same
/// class, so each of the four tables is keyed by the class its
/// combination actually produces. Unmapped locations default to 0.
pub fn quadrant_index(motion: &MotionData, location: Location) -> usize {
    let diamond =
        motion.start_location.is_intercardinal() || motion.end_location.is_intercardinal();
    let shift = motion.motion_type.is_shift();

    let index = match (diamond, shift) {
        (true, true) => cardinal_quadrant(location),
        (true, false) => intercardinal_quadrant(location),
        (false, true) => intercardinal_quadrant(location),
        (false, false) => cardinal_quadrant(location),
    };

    index.unwrap_or_else(|| {
        warn!(
            "no quadrant for {} arrow at {}, defaulting to 0",
            motion.motion_type.as_str(),
            location.as_str()
        );
        0
    })
}

/// N, E, S, W → 0..=3.
fn cardinal_quadrant(location: Location) -> Option<usize> {
    match location {
        Location::North => Some(0),
        Location::East => Some(1),
        Location::South => Some(2),
        Location::West => Some(3),
        _ => None,
    }
}

/// NE, SE, SW, NW → 0..=3.
fn intercardinal_quadrant(location: Location) -> Option<usize> {
    match location {
        Location::Northeast => Some(0),
        Location::Southeast => Some(1),
        Location::Southwest => Some(2),
        Location::Northwest => Some(3),
        _ => None,
    }
}
