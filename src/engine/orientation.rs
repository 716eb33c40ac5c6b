//! End-orientation calculation.
//!
//! The one place in the engine that raises instead of degrading: the end
//! orientation becomes the next beat's start orientation, so a silent
//! default would corrupt every beat after it.

use crate::engine::handpath::{classify_handpath, Handpath};
use crate::error::EngineError;
use crate::model::{MotionData, MotionType, Orientation, RotationDirection};

/// Compute the orientation a motion ends in.
///
/// FLOAT motions (and any motion with the `fl` turns sentinel) rotate the
/// orientation wheel 90° in the handpath's direction. Whole turns follow
/// the parity rules (PRO/STATIC preserve on even turns, ANTI/DASH on odd).
/// Half turns go through the (orientation, rotation direction) tables.
pub fn end_orientation(motion: &MotionData) -> Result<Orientation, EngineError> {
    if motion.motion_type == MotionType::Float || motion.turns.is_float() {
        return float_orientation(motion);
    }

    if let Some(n) = motion.turns.whole() {
        let flip = match motion.motion_type {
            MotionType::Pro | MotionType::Static => n % 2 == 1,
            MotionType::Anti | MotionType::Dash => n % 2 == 0,
            // FLOAT took the handpath branch above
            MotionType::Float => false,
        };
        return Ok(if flip {
            motion.start_orientation.flipped()
        } else {
            motion.start_orientation
        });
    }

    half_turn_orientation(motion)
}

/// The orientation wheel runs IN → CLOCK → OUT → COUNTER clockwise; a
/// float steps it one position in the handpath's direction.
fn float_orientation(motion: &MotionData) -> Result<Orientation, EngineError> {
    let handpath = classify_handpath(motion.start_location, motion.end_location);
    let result = match (motion.start_orientation, handpath) {
        (Orientation::In, Some(Handpath::Clockwise)) => Orientation::Clock,
        (Orientation::In, Some(Handpath::CounterClockwise)) => Orientation::Counter,
        (Orientation::Out, Some(Handpath::Clockwise)) => Orientation::Counter,
        (Orientation::Out, Some(Handpath::CounterClockwise)) => Orientation::Clock,
        (Orientation::Clock, Some(Handpath::Clockwise)) => Orientation::Out,
        (Orientation::Clock, Some(Handpath::CounterClockwise)) => Orientation::In,
        (Orientation::Counter, Some(Handpath::Clockwise)) => Orientation::In,
        (Orientation::Counter, Some(Handpath::CounterClockwise)) => Orientation::Out,
        // A float needs a quarter-turn handpath; dash/static/unmapped
        // paths have no float orientation.
        _ => return Err(unresolved(motion)),
    };
    Ok(result)
}

/// Half-turn lookup. The ANTI/DASH and PRO/STATIC tables are mirror
/// images: the same (orientation, rotation direction) entry with the
/// 0.5-pattern and 1.5-pattern results swapped.
fn half_turn_orientation(motion: &MotionData) -> Result<Orientation, EngineError> {
    // (result for turns % 2 == 0.5, result for turns % 2 == 1.5),
    // as seen by ANTI/DASH.
    let (low, high) = match (motion.start_orientation, motion.rotation_direction) {
        (Orientation::In, RotationDirection::Clockwise) => {
            (Orientation::Clock, Orientation::Counter)
        }
        (Orientation::In, RotationDirection::CounterClockwise) => {
            (Orientation::Counter, Orientation::Clock)
        }
        (Orientation::Out, RotationDirection::Clockwise) => {
            (Orientation::Counter, Orientation::Clock)
        }
        (Orientation::Out, RotationDirection::CounterClockwise) => {
            (Orientation::Clock, Orientation::Counter)
        }
        (Orientation::Clock, RotationDirection::Clockwise) => {
            (Orientation::Out, Orientation::In)
        }
        (Orientation::Clock, RotationDirection::CounterClockwise) => {
            (Orientation::In, Orientation::Out)
        }
        (Orientation::Counter, RotationDirection::Clockwise) => {
            (Orientation::In, Orientation::Out)
        }
        (Orientation::Counter, RotationDirection::CounterClockwise) => {
            (Orientation::Out, Orientation::In)
        }
        // A half turn with no rotation direction has no table entry.
        (_, RotationDirection::NoRotation) => return Err(unresolved(motion)),
    };

    let mirrored = matches!(motion.motion_type, MotionType::Pro | MotionType::Static);
    let (low, high) = if mirrored { (high, low) } else { (low, high) };

    Ok(if motion.turns.half_pattern_low() {
        low
    } else {
        high
    })
}

fn unresolved(motion: &MotionData) -> EngineError {
    EngineError::OrientationUnresolved {
        motion_type: motion.motion_type,
        turns: motion.turns,
        start_orientation: motion.start_orientation,
        rotation_direction: motion.rotation_direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Location, Turns};

    fn motion(
        motion_type: MotionType,
        turns: Turns,
        start_orientation: Orientation,
        rotation_direction: RotationDirection,
        start_location: Location,
        end_location: Location,
    ) -> MotionData {
        MotionData {
            color: Color::Blue,
            motion_type,
            start_location,
            end_location,
            start_orientation,
            end_orientation: None,
            rotation_direction,
            turns,
        }
    }

    #[test]
    fn float_rotates_the_orientation_wheel() {
        // Clockwise handpath: N → E
        let m = motion(
            MotionType::Float,
            Turns::Zero,
            Orientation::In,
            RotationDirection::NoRotation,
            Location::North,
            Location::East,
        );
        assert_eq!(end_orientation(&m).unwrap(), Orientation::Clock);

        // Counter-clockwise handpath: E → N
        let m = motion(
            MotionType::Float,
            Turns::Zero,
            Orientation::Clock,
            RotationDirection::NoRotation,
            Location::East,
            Location::North,
        );
        assert_eq!(end_orientation(&m).unwrap(), Orientation::In);
    }

    #[test]
    fn float_turns_sentinel_overrides_declared_type() {
        let m = motion(
            MotionType::Pro,
            Turns::Float,
            Orientation::Out,
            RotationDirection::Clockwise,
            Location::North,
            Location::East,
        );
        assert_eq!(end_orientation(&m).unwrap(), Orientation::Counter);
    }

    #[test]
    fn whole_turn_parity_rules() {
        for ori in Orientation::ALL {
            for (ty, turns, expect_flip) in [
                (MotionType::Pro, Turns::Zero, false),
                (MotionType::Pro, Turns::One, true),
                (MotionType::Static, Turns::Two, false),
                (MotionType::Static, Turns::Three, true),
                (MotionType::Anti, Turns::Zero, true),
                (MotionType::Anti, Turns::One, false),
                (MotionType::Dash, Turns::Two, true),
                (MotionType::Dash, Turns::Three, false),
            ] {
                let m = motion(
                    ty,
                    turns,
                    ori,
                    RotationDirection::Clockwise,
                    Location::North,
                    Location::East,
                );
                let expected = if expect_flip { ori.flipped() } else { ori };
                assert_eq!(end_orientation(&m).unwrap(), expected, "{ty:?} {turns}");
            }
        }
    }

    #[test]
    fn half_turn_tables_are_mirrored_between_families() {
        let anti = motion(
            MotionType::Anti,
            Turns::Half,
            Orientation::In,
            RotationDirection::Clockwise,
            Location::North,
            Location::East,
        );
        let pro = motion(
            MotionType::Pro,
            Turns::Half,
            Orientation::In,
            RotationDirection::Clockwise,
            Location::North,
            Location::East,
        );
        assert_eq!(end_orientation(&anti).unwrap(), Orientation::Clock);
        assert_eq!(end_orientation(&pro).unwrap(), Orientation::Counter);
    }

    #[test]
    fn half_turn_pattern_depends_on_turns_mod_two() {
        let base = motion(
            MotionType::Anti,
            Turns::Half,
            Orientation::Counter,
            RotationDirection::CounterClockwise,
            Location::West,
            Location::North,
        );
        assert_eq!(end_orientation(&base).unwrap(), Orientation::Out);

        let one_and_half = MotionData {
            turns: Turns::OneAndHalf,
            ..base.clone()
        };
        assert_eq!(end_orientation(&one_and_half).unwrap(), Orientation::In);

        let two_and_half = MotionData {
            turns: Turns::TwoAndHalf,
            ..base
        };
        assert_eq!(end_orientation(&two_and_half).unwrap(), Orientation::Out);
    }

    #[test]
    fn unresolvable_orientations_raise() {
        // Half turn without a rotation direction
        let m = motion(
            MotionType::Pro,
            Turns::Half,
            Orientation::In,
            RotationDirection::NoRotation,
            Location::North,
            Location::East,
        );
        assert!(end_orientation(&m).is_err());

        // Float over a dash handpath
        let m = motion(
            MotionType::Float,
            Turns::Zero,
            Orientation::In,
            RotationDirection::NoRotation,
            Location::North,
            Location::South,
        );
        assert!(end_orientation(&m).is_err());
    }
}
