//! Two-tier base-adjustment lookup: curated letter-specific overrides
//! first, generic defaults second, zero if both miss.

use log::warn;

use crate::engine::keys;
use crate::loader::PlacementTables;
use crate::model::{Adjustment, MotionData, PictographData};

/// Resolve the base (x, y) adjustment for a motion's arrow.
///
/// A special-tier hit is authoritative and returned verbatim, bypassing
/// the default tier entirely. A default-tier miss resolves to (0, 0)
/// with a warning; the arrow still renders, just unadjusted.
pub fn base_adjustment(
    pictograph: &PictographData,
    motion: &MotionData,
    tables: &PlacementTables,
) -> Adjustment {
    special_adjustment(pictograph, motion, tables)
        .or_else(|| default_adjustment(pictograph, motion, tables))
        .unwrap_or_else(|| {
            warn!(
                "no placement entry for {} {} arrow, using (0,0)",
                motion.color.as_str(),
                motion.motion_type.as_str()
            );
            Adjustment::ZERO
        })
}

fn special_adjustment(
    pictograph: &PictographData,
    motion: &MotionData,
    tables: &PlacementTables,
) -> Option<Adjustment> {
    let letter = pictograph.letter.as_deref()?;
    tables.special_adjustment(
        letter,
        &keys::orientation_key(motion),
        &keys::turns_tuple_key(pictograph),
        &keys::attribute_key(motion, pictograph),
    )
}

fn default_adjustment(
    pictograph: &PictographData,
    motion: &MotionData,
    tables: &PlacementTables,
) -> Option<Adjustment> {
    let grid_mode = keys::effective_grid_mode(pictograph, motion);
    let placement_key = keys::placement_key(motion, grid_mode, tables);
    tables.default_adjustment(
        grid_mode,
        motion.motion_type,
        &placement_key,
        motion.turns.as_key_str(),
    )
}
