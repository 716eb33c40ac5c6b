//! Arrow placement engine — composes the calculators into one result
//! per (beat, prop).
//!
//! Every calculator is a pure function over immutable inputs; only the
//! placement tables persist across calls, loaded once and read-only
//! thereafter.

mod handpath;
mod keys;
mod location;
mod orientation;
mod placement;
mod quadrant;
mod rotation;
mod tuples;

use crate::error::EngineError;
use crate::loader::PlacementTables;
use crate::model::{ArrowPlacement, Color, PictographData, PictographPlacements};

pub use handpath::{classify_handpath, Handpath};
pub use keys::{attribute_key, effective_grid_mode, orientation_key, placement_key, turns_tuple_key};
pub use location::{arrow_location, shift_location};
pub use orientation::end_orientation;
pub use placement::base_adjustment;
pub use quadrant::quadrant_index;
pub use rotation::rotation_angle;
pub use tuples::{generate_directional_tuples, process_directional_tuples};

/// Compute one prop's arrow placement for one beat.
///
/// Orientation resolves first (and is the only fallible step); the
/// placement lookup then runs with the freshly computed end orientation,
/// and the rotation angle is computed independently off the location.
pub fn calculate_arrow(
    pictograph: &PictographData,
    color: Color,
    tables: &PlacementTables,
) -> Result<ArrowPlacement, EngineError> {
    let motion = pictograph.motion(color);

    let end_orientation = orientation::end_orientation(motion)?;
    let oriented = motion.with_end_orientation(end_orientation);

    let location = location::arrow_location(&oriented, Some(pictograph));
    let rotation_angle = rotation::rotation_angle(&oriented, location);

    let base = placement::base_adjustment(pictograph, &oriented, tables);
    let adjustment = tuples::process_directional_tuples(&oriented, base, location);

    Ok(ArrowPlacement {
        location,
        rotation_angle,
        adjustment,
        end_orientation,
    })
}

/// Compute both props' placements for one beat — the unit the rendering
/// layer consumes.
pub fn calculate_pictograph(
    pictograph: &PictographData,
    tables: &PlacementTables,
) -> Result<PictographPlacements, EngineError> {
    Ok(PictographPlacements {
        blue: calculate_arrow(pictograph, Color::Blue, tables)?,
        red: calculate_arrow(pictograph, Color::Red, tables)?,
    })
}
