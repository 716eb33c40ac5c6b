//! Arrow rotation angles in degrees, computed off the arrow's grid
//! location. Runs independently of the adjustment pipeline.

use log::warn;

use crate::engine::handpath::{classify_handpath, Handpath};
use crate::model::{Location, MotionData, MotionType, RotationDirection};

/// Rotation angle for a motion's arrow drawn at `location`.
pub fn rotation_angle(motion: &MotionData, location: Location) -> f64 {
    match motion.motion_type {
        MotionType::Static => static_angle(location),
        MotionType::Pro => shift_angle(motion, location, false),
        MotionType::Anti => shift_angle(motion, location, true),
        MotionType::Float => float_angle(motion, location),
        MotionType::Dash => dash_angle(motion, location),
    }
}

/// PRO and ANTI share the same table pair with the sense inverted.
fn shift_angle(motion: &MotionData, location: Location, inverted: bool) -> f64 {
    let clockwise = match motion.rotation_direction {
        RotationDirection::Clockwise => !inverted,
        RotationDirection::CounterClockwise => inverted,
        RotationDirection::NoRotation => {
            warn!(
                "{} arrow at {} has no rotation direction, using 0°",
                motion.motion_type.as_str(),
                location.as_str()
            );
            return 0.0;
        }
    };
    if clockwise {
        clockwise_shift_angle(location)
    } else {
        counter_shift_angle(location)
    }
}

/// Floats use the PRO tables; the side comes from the rotation direction
/// when declared, and from the handpath otherwise.
fn float_angle(motion: &MotionData, location: Location) -> f64 {
    let clockwise = match motion.rotation_direction {
        RotationDirection::Clockwise => Some(true),
        RotationDirection::CounterClockwise => Some(false),
        RotationDirection::NoRotation => {
            match classify_handpath(motion.start_location, motion.end_location) {
                Some(Handpath::Clockwise) => Some(true),
                Some(Handpath::CounterClockwise) => Some(false),
                _ => None,
            }
        }
    };
    match clockwise {
        Some(true) => clockwise_shift_angle(location),
        Some(false) => counter_shift_angle(location),
        None => {
            warn!(
                "float {} -> {} has no rotational sense, using 0°",
                motion.start_location.as_str(),
                motion.end_location.as_str()
            );
            0.0
        }
    }
}

/// Straight dashes still imply directionality, keyed by the travel pair;
/// rotational dashes behave like ANTI.
fn dash_angle(motion: &MotionData, location: Location) -> f64 {
    match motion.rotation_direction {
        RotationDirection::NoRotation => {
            straight_dash_angle(motion.start_location, motion.end_location).unwrap_or_else(|| {
                warn!(
                    "no angle for dash {} -> {}, using 0°",
                    motion.start_location.as_str(),
                    motion.end_location.as_str()
                );
                0.0
            })
        }
        _ => shift_angle(motion, location, true),
    }
}

/// Inward-pointing angles, independent of rotation direction.
fn static_angle(location: Location) -> f64 {
    match location {
        Location::North => 180.0,
        Location::Northeast => 225.0,
        Location::East => 270.0,
        Location::Southeast => 315.0,
        Location::South => 0.0,
        Location::Southwest => 45.0,
        Location::West => 90.0,
        Location::Northwest => 135.0,
    }
}

fn clockwise_shift_angle(location: Location) -> f64 {
    match location {
        Location::North => 315.0,
        Location::Northeast => 0.0,
        Location::East => 45.0,
        Location::Southeast => 90.0,
        Location::South => 135.0,
        Location::Southwest => 180.0,
        Location::West => 225.0,
        Location::Northwest => 270.0,
    }
}

fn counter_shift_angle(location: Location) -> f64 {
    match location {
        Location::North => 315.0,
        Location::Northeast => 270.0,
        Location::East => 225.0,
        Location::Southeast => 180.0,
        Location::South => 135.0,
        Location::Southwest => 90.0,
        Location::West => 45.0,
        Location::Northwest => 0.0,
    }
}

fn straight_dash_angle(start: Location, end: Location) -> Option<f64> {
    match (start, end) {
        (Location::North, Location::South) => Some(90.0),
        (Location::East, Location::West) => Some(180.0),
        (Location::South, Location::North) => Some(270.0),
        (Location::West, Location::East) => Some(0.0),
        (Location::Northeast, Location::Southwest) => Some(135.0),
        (Location::Southeast, Location::Northwest) => Some(225.0),
        (Location::Southwest, Location::Northeast) => Some(315.0),
        (Location::Northwest, Location::Southeast) => Some(45.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Orientation, Turns};

    fn motion(
        motion_type: MotionType,
        rotation_direction: RotationDirection,
        start: Location,
        end: Location,
    ) -> MotionData {
        MotionData {
            color: Color::Blue,
            motion_type,
            start_location: start,
            end_location: end,
            start_orientation: Orientation::In,
            end_orientation: None,
            rotation_direction,
            turns: Turns::One,
        }
    }

    #[test]
    fn anti_inverts_the_pro_sense() {
        let pro = motion(
            MotionType::Pro,
            RotationDirection::Clockwise,
            Location::North,
            Location::East,
        );
        let anti = motion(
            MotionType::Anti,
            RotationDirection::Clockwise,
            Location::North,
            Location::East,
        );
        assert_eq!(rotation_angle(&pro, Location::Northeast), 0.0);
        assert_eq!(rotation_angle(&anti, Location::Northeast), 270.0);
    }

    #[test]
    fn float_without_declared_rotation_uses_handpath() {
        let m = motion(
            MotionType::Float,
            RotationDirection::NoRotation,
            Location::North,
            Location::East,
        );
        assert_eq!(
            rotation_angle(&m, Location::Northeast),
            clockwise_shift_angle(Location::Northeast)
        );
    }

    #[test]
    fn straight_dash_angles_cover_all_axes() {
        for (start, end, expected) in [
            (Location::North, Location::South, 90.0),
            (Location::South, Location::North, 270.0),
            (Location::East, Location::West, 180.0),
            (Location::West, Location::East, 0.0),
            (Location::Northeast, Location::Southwest, 135.0),
            (Location::Northwest, Location::Southeast, 45.0),
        ] {
            let m = motion(MotionType::Dash, RotationDirection::NoRotation, start, end);
            let loc = crate::engine::location::arrow_location(&m, None);
            assert_eq!(rotation_angle(&m, loc), expected);
        }
    }
}
