//! Directional tuple processing — mirrors the base adjustment into the
//! four grid quadrants and selects the variant for the arrow's location.

use crate::engine::quadrant::quadrant_index;
use crate::model::{Adjustment, Location, MotionData, MotionType, RotationDirection};

/// The four quadrant-mirrored variants of a base adjustment, ordered by
/// the quadrant convention (NE, SE, SW, NW — or the cardinal equivalent).
///
/// Variant 0 is always the unmodified base; the rest are axis sign-flips
/// of it. PRO and ANTI order the flips by rotation direction (with
/// opposite senses); every other category uses the clockwise order. A
/// (0, 0) base legitimately yields four (0, 0) variants.
pub fn generate_directional_tuples(motion: &MotionData, base: Adjustment) -> [Adjustment; 4] {
    let clockwise_order = match motion.motion_type {
        MotionType::Pro => motion.rotation_direction != RotationDirection::CounterClockwise,
        MotionType::Anti => motion.rotation_direction == RotationDirection::CounterClockwise,
        MotionType::Static | MotionType::Dash | MotionType::Float => true,
    };

    let Adjustment { x, y } = base;
    if clockwise_order {
        [
            base,
            Adjustment::new(x, -y),
            Adjustment::new(-x, -y),
            Adjustment::new(-x, y),
        ]
    } else {
        [
            base,
            Adjustment::new(-x, y),
            Adjustment::new(-x, -y),
            Adjustment::new(x, -y),
        ]
    }
}

/// Mirror the base adjustment and pick the variant for `location`.
pub fn process_directional_tuples(
    motion: &MotionData,
    base: Adjustment,
    location: Location,
) -> Adjustment {
    let tuples = generate_directional_tuples(motion, base);
    tuples[quadrant_index(motion, location)]
}
