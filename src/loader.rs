//! Placement-table loading — converts external JSON placement data into
//! the in-memory tables the lookup engine reads.
//!
//! Tables are loaded once and read-only afterwards. Each (grid mode,
//! motion type) default table loads independently: a missing or malformed
//! file degrades only its own combination to empty and the rest load
//! normally.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::EngineError;
use crate::model::{Adjustment, GridMode, MotionType};

/// Default tier: `placement key -> turns string -> adjustment`.
type DefaultTable = BTreeMap<String, BTreeMap<String, Adjustment>>;

/// Special tier for one letter:
/// `orientation key -> turns tuple -> attribute key -> adjustment`.
type SpecialLetterTable = BTreeMap<String, BTreeMap<String, BTreeMap<String, Adjustment>>>;

/// Raw JSON shapes — adjustments arrive as `[x, y]` arrays.
type RawDefaultTable = BTreeMap<String, BTreeMap<String, [f64; 2]>>;
type RawSpecialTable =
    BTreeMap<String, BTreeMap<String, BTreeMap<String, BTreeMap<String, [f64; 2]>>>>;

/// Grid modes that have default placement data on disk. SKEWED pictographs
/// resolve per motion to one of these two.
const TABLE_GRID_MODES: [GridMode; 2] = [GridMode::Diamond, GridMode::Box];

const TABLE_MOTION_TYPES: [MotionType; 5] = [
    MotionType::Static,
    MotionType::Pro,
    MotionType::Anti,
    MotionType::Float,
    MotionType::Dash,
];

/// All placement data, loaded once and shared read-only across calls.
#[derive(Debug, Default)]
pub struct PlacementTables {
    default: BTreeMap<(GridMode, MotionType), DefaultTable>,
    special: BTreeMap<String, SpecialLetterTable>,
}

impl PlacementTables {
    /// Empty tables — every lookup falls through to its documented default.
    pub fn new() -> PlacementTables {
        PlacementTables::default()
    }

    /// Load one (grid mode, motion type) default table from a JSON string
    /// shaped `{ placementKey: { turnsString: [x, y] } }`.
    pub fn load_default_table(
        &mut self,
        grid_mode: GridMode,
        motion_type: MotionType,
        json: &str,
    ) -> Result<(), EngineError> {
        let raw: RawDefaultTable = serde_json::from_str(json)?;
        let table = raw
            .into_iter()
            .map(|(key, by_turns)| {
                let by_turns = by_turns
                    .into_iter()
                    .map(|(turns, [x, y])| (turns, Adjustment::new(x, y)))
                    .collect();
                (key, by_turns)
            })
            .collect();
        self.default.insert((grid_mode, motion_type), table);
        Ok(())
    }

    /// Load the special-placement overrides from a JSON string shaped
    /// `{ letter: { orientationKey: { turnsTuple: { attributeKey: [x, y] } } } }`.
    pub fn load_special_table(&mut self, json: &str) -> Result<(), EngineError> {
        let raw: RawSpecialTable = serde_json::from_str(json)?;
        for (letter, by_ori) in raw {
            let letter_table = by_ori
                .into_iter()
                .map(|(ori_key, by_turns)| {
                    let by_turns = by_turns
                        .into_iter()
                        .map(|(turns, by_attr)| {
                            let by_attr = by_attr
                                .into_iter()
                                .map(|(attr, [x, y])| (attr, Adjustment::new(x, y)))
                                .collect();
                            (turns, by_attr)
                        })
                        .collect();
                    (ori_key, by_turns)
                })
                .collect();
            self.special.insert(letter, letter_table);
        }
        Ok(())
    }

    /// Load every placement table from a data directory.
    ///
    /// Expects one `{grid}_{motion}_placements.json` file per combination
    /// (e.g. `diamond_pro_placements.json`) plus `special_placements.json`.
    /// A missing or malformed file degrades only its own combination to
    /// empty with a logged warning; the directory itself must exist.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<PlacementTables, EngineError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(EngineError::PlacementData(format!(
                "placement data directory '{}' not found",
                dir.display()
            )));
        }

        let mut tables = PlacementTables::new();

        for grid_mode in TABLE_GRID_MODES {
            for motion_type in TABLE_MOTION_TYPES {
                let name = format!(
                    "{}_{}_placements.json",
                    grid_mode.as_str(),
                    motion_type.as_str()
                );
                let path = dir.join(&name);
                match std::fs::read_to_string(&path) {
                    Ok(json) => {
                        if let Err(e) = tables.load_default_table(grid_mode, motion_type, &json) {
                            log::warn!("skipping malformed placement table '{name}': {e}");
                            tables
                                .default
                                .insert((grid_mode, motion_type), DefaultTable::new());
                        }
                    }
                    Err(e) => {
                        log::warn!("placement table '{name}' not loaded: {e}");
                        tables
                            .default
                            .insert((grid_mode, motion_type), DefaultTable::new());
                    }
                }
            }
        }

        let special_path = dir.join("special_placements.json");
        match std::fs::read_to_string(&special_path) {
            Ok(json) => {
                if let Err(e) = tables.load_special_table(&json) {
                    log::warn!("skipping malformed special placements: {e}");
                }
            }
            Err(e) => {
                log::warn!("special placements not loaded: {e}");
            }
        }

        Ok(tables)
    }

    /// Default-tier probe by exact (placement key, turns string).
    pub fn default_adjustment(
        &self,
        grid_mode: GridMode,
        motion_type: MotionType,
        placement_key: &str,
        turns: &str,
    ) -> Option<Adjustment> {
        self.default
            .get(&(grid_mode, motion_type))?
            .get(placement_key)?
            .get(turns)
            .copied()
    }

    /// Whether the default table for this combination carries `key`.
    pub fn has_default_key(
        &self,
        grid_mode: GridMode,
        motion_type: MotionType,
        key: &str,
    ) -> bool {
        self.default
            .get(&(grid_mode, motion_type))
            .is_some_and(|t| t.contains_key(key))
    }

    /// First placement key available for this combination, in lexical
    /// order. Deterministic because tables are ordered maps.
    pub fn first_default_key(
        &self,
        grid_mode: GridMode,
        motion_type: MotionType,
    ) -> Option<&str> {
        self.default
            .get(&(grid_mode, motion_type))?
            .keys()
            .next()
            .map(String::as_str)
    }

    /// Number of placement keys loaded for this combination.
    pub fn default_key_count(&self, grid_mode: GridMode, motion_type: MotionType) -> usize {
        self.default
            .get(&(grid_mode, motion_type))
            .map_or(0, BTreeMap::len)
    }

    /// Special-tier probe. Found entries are authoritative and bypass the
    /// default tier entirely.
    pub fn special_adjustment(
        &self,
        letter: &str,
        orientation_key: &str,
        turns_tuple: &str,
        attribute_key: &str,
    ) -> Option<Adjustment> {
        self.special
            .get(letter)?
            .get(orientation_key)?
            .get(turns_tuple)?
            .get(attribute_key)
            .copied()
    }

    /// Whether any special overrides exist for `letter`.
    pub fn has_special_letter(&self, letter: &str) -> bool {
        self.special.contains_key(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_parses_and_probes() {
        let mut tables = PlacementTables::new();
        tables
            .load_default_table(
                GridMode::Diamond,
                MotionType::Pro,
                r#"{ "pro_cw": { "0": [3, -2], "1.5": [0.5, 7] } }"#,
            )
            .unwrap();

        assert_eq!(
            tables.default_adjustment(GridMode::Diamond, MotionType::Pro, "pro_cw", "0"),
            Some(Adjustment::new(3.0, -2.0))
        );
        assert_eq!(
            tables.default_adjustment(GridMode::Diamond, MotionType::Pro, "pro_cw", "2"),
            None
        );
        assert_eq!(
            tables.default_adjustment(GridMode::Box, MotionType::Pro, "pro_cw", "0"),
            None
        );
    }

    #[test]
    fn special_table_parses_and_probes() {
        let mut tables = PlacementTables::new();
        tables
            .load_special_table(
                r#"{ "A": { "from_radial": { "(1,0)": { "blue_pro": [-4, 6] } } } }"#,
            )
            .unwrap();

        assert_eq!(
            tables.special_adjustment("A", "from_radial", "(1,0)", "blue_pro"),
            Some(Adjustment::new(-4.0, 6.0))
        );
        assert_eq!(
            tables.special_adjustment("A", "from_radial", "(1,1)", "blue_pro"),
            None
        );
        assert!(tables.has_special_letter("A"));
        assert!(!tables.has_special_letter("B"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut tables = PlacementTables::new();
        let result =
            tables.load_default_table(GridMode::Box, MotionType::Dash, r#"{ "dash": 3 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn first_default_key_is_lexically_ordered() {
        let mut tables = PlacementTables::new();
        tables
            .load_default_table(
                GridMode::Box,
                MotionType::Static,
                r#"{ "static_b": { "0": [1, 1] }, "static_a": { "0": [2, 2] } }"#,
            )
            .unwrap();
        assert_eq!(
            tables.first_default_key(GridMode::Box, MotionType::Static),
            Some("static_a")
        );
    }
}
