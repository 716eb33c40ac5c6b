//! Arrow location calculation — which grid point an arrow is drawn at.
//!
//! STATIC arrows sit on their start location. Shift arrows sit between
//! their two endpoints. Dash arrows sit perpendicular to their travel
//! line, and sometimes need the sibling prop's motion to pick a side.

use log::warn;

use crate::model::{Location, MotionData, MotionType, PictographData, RotationDirection};

/// Compute the grid location an arrow is drawn at.
///
/// The pictograph is only consulted for dash motions (Type 3
/// disambiguation); pass `None` when no sibling context exists.
pub fn arrow_location(motion: &MotionData, pictograph: Option<&PictographData>) -> Location {
    match motion.motion_type {
        MotionType::Static => motion.start_location,
        MotionType::Pro | MotionType::Anti | MotionType::Float => {
            shift_location(motion.start_location, motion.end_location).unwrap_or_else(|| {
                warn!(
                    "no shift location for {} -> {}, falling back to start",
                    motion.start_location.as_str(),
                    motion.end_location.as_str()
                );
                motion.start_location
            })
        }
        MotionType::Dash => dash_location(motion, pictograph),
    }
}

/// Location between two endpoints of a shift. Symmetric: the pair is
/// unordered, so `shift_location(a, b) == shift_location(b, a)`.
pub fn shift_location(a: Location, b: Location) -> Option<Location> {
    let pair = if a.compass_index() <= b.compass_index() {
        (a, b)
    } else {
        (b, a)
    };
    match pair {
        (Location::North, Location::East) => Some(Location::Northeast),
        (Location::East, Location::South) => Some(Location::Southeast),
        (Location::South, Location::West) => Some(Location::Southwest),
        (Location::North, Location::West) => Some(Location::Northwest),
        (Location::Northeast, Location::Southeast) => Some(Location::East),
        (Location::Southeast, Location::Southwest) => Some(Location::South),
        (Location::Southwest, Location::Northwest) => Some(Location::West),
        (Location::Northeast, Location::Northwest) => Some(Location::North),
        _ => None,
    }
}

/// Dash arrows with a declared rotation direction take the quarter-turn
/// location in that direction; straight (no-rotation) dashes sit
/// perpendicular to the travel line, on the side away from the sibling
/// shift's arrow when one exists (Type 3).
fn dash_location(motion: &MotionData, pictograph: Option<&PictographData>) -> Location {
    match motion.rotation_direction {
        RotationDirection::Clockwise => quarter_clockwise(motion.start_location),
        RotationDirection::CounterClockwise => quarter_counter_clockwise(motion.start_location),
        RotationDirection::NoRotation => {
            let Some(candidate) =
                straight_dash_location(motion.start_location, motion.end_location)
            else {
                warn!(
                    "dash {} -> {} is not a straight line, falling back to start",
                    motion.start_location.as_str(),
                    motion.end_location.as_str()
                );
                return motion.start_location;
            };

            let Some(pictograph) = pictograph else {
                warn!(
                    "dash {} -> {} has no pictograph context, falling back to start",
                    motion.start_location.as_str(),
                    motion.end_location.as_str()
                );
                return motion.start_location;
            };

            let sibling = pictograph.sibling(motion.color);
            if sibling.motion_type.is_shift() {
                // Type 3: two perpendicular spots are plausible; take the
                // one farther from the sibling shift's arrow.
                let alternate = candidate.opposite();
                let shift_loc = arrow_location(sibling, None);
                if compass_distance(shift_loc, candidate) < compass_distance(shift_loc, alternate)
                {
                    return alternate;
                }
            }
            candidate
        }
    }
}

/// Default perpendicular location for a straight dash, keyed by the
/// ordered (start, end) pair. `None` for non-opposite pairs.
fn straight_dash_location(start: Location, end: Location) -> Option<Location> {
    match (start, end) {
        (Location::North, Location::South) => Some(Location::East),
        (Location::East, Location::West) => Some(Location::South),
        (Location::South, Location::North) => Some(Location::West),
        (Location::West, Location::East) => Some(Location::North),
        (Location::Northeast, Location::Southwest) => Some(Location::Southeast),
        (Location::Southeast, Location::Northwest) => Some(Location::Southwest),
        (Location::Southwest, Location::Northeast) => Some(Location::Northwest),
        (Location::Northwest, Location::Southeast) => Some(Location::Northeast),
        _ => None,
    }
}

fn quarter_clockwise(location: Location) -> Location {
    match location {
        Location::North => Location::East,
        Location::East => Location::South,
        Location::South => Location::West,
        Location::West => Location::North,
        Location::Northeast => Location::Southeast,
        Location::Southeast => Location::Southwest,
        Location::Southwest => Location::Northwest,
        Location::Northwest => Location::Northeast,
    }
}

fn quarter_counter_clockwise(location: Location) -> Location {
    match location {
        Location::North => Location::West,
        Location::West => Location::South,
        Location::South => Location::East,
        Location::East => Location::North,
        Location::Northeast => Location::Northwest,
        Location::Northwest => Location::Southwest,
        Location::Southwest => Location::Southeast,
        Location::Southeast => Location::Northeast,
    }
}

/// Steps around the compass between two locations (0..=4).
fn compass_distance(a: Location, b: Location) -> usize {
    let d = (a.compass_index() as i32 - b.compass_index() as i32).rem_euclid(8) as usize;
    d.min(8 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotational_dash_takes_the_quarter_turn() {
        assert_eq!(quarter_clockwise(Location::North), Location::East);
        assert_eq!(quarter_counter_clockwise(Location::North), Location::West);
        assert_eq!(quarter_clockwise(Location::Northwest), Location::Northeast);
    }

    #[test]
    fn straight_dash_is_perpendicular() {
        assert_eq!(
            straight_dash_location(Location::North, Location::South),
            Some(Location::East)
        );
        assert_eq!(
            straight_dash_location(Location::South, Location::North),
            Some(Location::West)
        );
        assert_eq!(
            straight_dash_location(Location::North, Location::East),
            None
        );
    }
}
