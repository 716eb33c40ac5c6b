//! Placement key generation — the strings that index the two lookup
//! tiers. Keys have no identity of their own; they only need to agree
//! with the vocabulary of the placement data.

use crate::engine::handpath::{classify_handpath, Handpath};
use crate::loader::PlacementTables;
use crate::model::{GridMode, Location, MotionData, MotionType, PictographData};

/// Orientation key for the special tier: the radial/rotational class of
/// the start orientation, with the end class appended when it crosses
/// over (e.g. a half turn from IN to CLOCK).
pub fn orientation_key(motion: &MotionData) -> String {
    let start = orientation_class(motion.start_orientation.is_radial());
    match motion.end_orientation {
        Some(end) if end.is_radial() != motion.start_orientation.is_radial() => {
            format!("from_{}_to_{}", start, orientation_class(end.is_radial()))
        }
        _ => format!("from_{start}"),
    }
}

fn orientation_class(radial: bool) -> &'static str {
    if radial {
        "radial"
    } else {
        "rotational"
    }
}

/// Both props' turns as an ordered tuple string, blue first. Integral
/// turns drop the decimal and the float sentinel renders as `fl`,
/// e.g. `(1,0.5)` or `(fl,2)`.
pub fn turns_tuple_key(pictograph: &PictographData) -> String {
    format!(
        "({},{})",
        pictograph.blue_motion.turns.as_key_str(),
        pictograph.red_motion.turns.as_key_str()
    )
}

/// Attribute key for the special tier. When both props share a motion
/// type the color disambiguates (`blue_pro`); for hybrid letters the
/// motion type alone does (`dash`).
pub fn attribute_key(motion: &MotionData, pictograph: &PictographData) -> String {
    let sibling = pictograph.sibling(motion.color);
    if sibling.motion_type == motion.motion_type {
        format!(
            "{}_{}",
            motion.color.as_str(),
            motion.motion_type.as_str()
        )
    } else {
        motion.motion_type.as_str().to_string()
    }
}

/// Grid mode used for the default-tier lookup. SKEWED pictographs
/// resolve per motion: cardinal endpoints use the DIAMOND tables,
/// anything else the BOX tables.
pub fn effective_grid_mode(pictograph: &PictographData, motion: &MotionData) -> GridMode {
    match pictograph.grid_mode {
        GridMode::Skewed => {
            if motion.start_location.is_cardinal() && motion.end_location.is_cardinal() {
                GridMode::Diamond
            } else {
                GridMode::Box
            }
        }
        mode => mode,
    }
}

/// Generic placement key for the default tier. Each motion type
/// enumerates its own categories; when the exact category is absent from
/// the loaded table the first available key for that (grid mode, motion
/// type) stands in, so thin data still resolves to something.
pub fn placement_key(
    motion: &MotionData,
    grid_mode: GridMode,
    tables: &PlacementTables,
) -> String {
    let exact = exact_placement_key(motion);
    if tables.has_default_key(grid_mode, motion.motion_type, &exact) {
        return exact;
    }
    tables
        .first_default_key(grid_mode, motion.motion_type)
        .map(str::to_owned)
        .unwrap_or(exact)
}

fn exact_placement_key(motion: &MotionData) -> String {
    let ty = motion.motion_type.as_str();
    match motion.motion_type {
        MotionType::Static => {
            if motion.start_location.is_cardinal() {
                format!("{ty}_cardinal")
            } else {
                format!("{ty}_intercardinal")
            }
        }
        MotionType::Pro | MotionType::Anti | MotionType::Float => {
            match classify_handpath(motion.start_location, motion.end_location) {
                Some(Handpath::Clockwise) => format!("{ty}_cw"),
                Some(Handpath::CounterClockwise) => format!("{ty}_ccw"),
                _ => ty.to_string(),
            }
        }
        MotionType::Dash => {
            if motion.end_location != motion.start_location.opposite() {
                ty.to_string()
            } else if motion.start_location.is_intercardinal() {
                format!("{ty}_diagonal")
            } else if matches!(motion.start_location, Location::North | Location::South) {
                format!("{ty}_vertical")
            } else {
                format!("{ty}_horizontal")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Location, MotionData, Orientation, RotationDirection, Turns};

    fn motion(color: Color, motion_type: MotionType, start: Location, end: Location) -> MotionData {
        MotionData {
            color,
            motion_type,
            start_location: start,
            end_location: end,
            start_orientation: Orientation::In,
            end_orientation: None,
            rotation_direction: RotationDirection::Clockwise,
            turns: Turns::One,
        }
    }

    #[test]
    fn exact_keys_by_motion_type() {
        let pro = motion(Color::Blue, MotionType::Pro, Location::North, Location::East);
        assert_eq!(exact_placement_key(&pro), "pro_cw");

        let anti = motion(Color::Blue, MotionType::Anti, Location::East, Location::North);
        assert_eq!(exact_placement_key(&anti), "anti_ccw");

        let stat = motion(
            Color::Blue,
            MotionType::Static,
            Location::Northwest,
            Location::Northwest,
        );
        assert_eq!(exact_placement_key(&stat), "static_intercardinal");

        let dash = motion(Color::Blue, MotionType::Dash, Location::East, Location::West);
        assert_eq!(exact_placement_key(&dash), "dash_horizontal");

        let dash = motion(
            Color::Blue,
            MotionType::Dash,
            Location::Northeast,
            Location::Southwest,
        );
        assert_eq!(exact_placement_key(&dash), "dash_diagonal");
    }

    #[test]
    fn orientation_key_tracks_class_crossing() {
        let mut m = motion(Color::Red, MotionType::Pro, Location::North, Location::East);
        assert_eq!(orientation_key(&m), "from_radial");

        m.end_orientation = Some(Orientation::Out);
        assert_eq!(orientation_key(&m), "from_radial");

        m.end_orientation = Some(Orientation::Clock);
        assert_eq!(orientation_key(&m), "from_radial_to_rotational");

        m.start_orientation = Orientation::Counter;
        m.end_orientation = Some(Orientation::In);
        assert_eq!(orientation_key(&m), "from_rotational_to_radial");
    }
}
