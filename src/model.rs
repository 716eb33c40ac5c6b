//! Data model for pictograph motions and computed arrow placements.
//!
//! These structures capture the per-beat motion information the engine
//! consumes and the placement information it hands back to the renderer.

use serde::{Deserialize, Serialize};

/// One of the eight compass points of the pictograph grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "ne")]
    Northeast,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "se")]
    Southeast,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "sw")]
    Southwest,
    #[serde(rename = "w")]
    West,
    #[serde(rename = "nw")]
    Northwest,
}

/// How a prop is facing relative to the grid center.
///
/// IN/OUT are the radial orientations, CLOCK/COUNTER the rotational ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
    #[serde(rename = "clock")]
    Clock,
    #[serde(rename = "counter")]
    Counter,
}

/// Declared rotation sense of a motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
    #[serde(rename = "no_rot")]
    NoRotation,
}

/// The five motion types of the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MotionType {
    #[serde(rename = "static")]
    Static,
    #[serde(rename = "pro")]
    Pro,
    #[serde(rename = "anti")]
    Anti,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "dash")]
    Dash,
}

/// Grid mode of a pictograph. DIAMOND props sit on cardinal points,
/// BOX props on intercardinal points, SKEWED mixes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GridMode {
    #[serde(rename = "diamond")]
    Diamond,
    #[serde(rename = "box")]
    Box,
    #[serde(rename = "skewed")]
    Skewed,
}

/// Which of the two props a motion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "red")]
    Red,
}

/// Turn count of a motion: whole or half turns from 0 to 3, or the
/// `fl` sentinel, which behaves orientation-wise like a FLOAT motion
/// regardless of the declared motion type.
///
/// Serializes as a JSON number (`1`, `0.5`) or the string `"fl"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turns {
    Zero,
    Half,
    One,
    OneAndHalf,
    Two,
    TwoAndHalf,
    Three,
    Float,
}

/// One prop's motion for one beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionData {
    /// Which prop this motion drives
    pub color: Color,
    /// Motion type
    pub motion_type: MotionType,
    /// Grid location the prop starts at (always present)
    pub start_location: Location,
    /// Grid location the prop ends at (== start for STATIC)
    pub end_location: Location,
    /// Orientation at the start of the beat
    pub start_orientation: Orientation,
    /// Orientation at the end of the beat, once computed.
    /// Upstream data may carry it; the engine recomputes it regardless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_orientation: Option<Orientation>,
    /// Declared rotation sense
    pub rotation_direction: RotationDirection,
    /// Turn count
    pub turns: Turns,
}

/// A full pictograph: the letter plus both props' motions for one beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictographData {
    /// Letter this pictograph encodes (used for special-placement lookup)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    /// Grid mode of the pictograph
    #[serde(default)]
    pub grid_mode: GridMode,
    /// The blue prop's motion
    pub blue_motion: MotionData,
    /// The red prop's motion
    pub red_motion: MotionData,
}

/// A pixel-space positional adjustment applied to an arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub x: f64,
    pub y: f64,
}

/// Everything the renderer needs to draw one arrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowPlacement {
    /// Grid location the arrow is drawn at
    pub location: Location,
    /// Rotation of the arrow glyph in degrees
    pub rotation_angle: f64,
    /// Pixel-space positional adjustment
    pub adjustment: Adjustment,
    /// Resulting orientation, threaded as the next beat's start orientation
    pub end_orientation: Orientation,
}

/// Both props' placements for one beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictographPlacements {
    pub blue: ArrowPlacement,
    pub red: ArrowPlacement,
}

impl Location {
    /// All eight locations in clockwise order starting at north.
    pub const ALL: [Location; 8] = [
        Location::North,
        Location::Northeast,
        Location::East,
        Location::Southeast,
        Location::South,
        Location::Southwest,
        Location::West,
        Location::Northwest,
    ];

    /// True for N, E, S, W.
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Location::North | Location::East | Location::South | Location::West
        )
    }

    /// True for NE, SE, SW, NW.
    pub fn is_intercardinal(self) -> bool {
        !self.is_cardinal()
    }

    /// The diametrically opposite location.
    pub fn opposite(self) -> Location {
        match self {
            Location::North => Location::South,
            Location::Northeast => Location::Southwest,
            Location::East => Location::West,
            Location::Southeast => Location::Northwest,
            Location::South => Location::North,
            Location::Southwest => Location::Northeast,
            Location::West => Location::East,
            Location::Northwest => Location::Southeast,
        }
    }

    /// Index into the clockwise ordering (north = 0, northeast = 1, ...).
    pub fn compass_index(self) -> usize {
        match self {
            Location::North => 0,
            Location::Northeast => 1,
            Location::East => 2,
            Location::Southeast => 3,
            Location::South => 4,
            Location::Southwest => 5,
            Location::West => 6,
            Location::Northwest => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Location::North => "n",
            Location::Northeast => "ne",
            Location::East => "e",
            Location::Southeast => "se",
            Location::South => "s",
            Location::Southwest => "sw",
            Location::West => "w",
            Location::Northwest => "nw",
        }
    }
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::In,
        Orientation::Out,
        Orientation::Clock,
        Orientation::Counter,
    ];

    /// True for IN/OUT, false for CLOCK/COUNTER.
    pub fn is_radial(self) -> bool {
        matches!(self, Orientation::In | Orientation::Out)
    }

    /// IN↔OUT, CLOCK↔COUNTER.
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::In => Orientation::Out,
            Orientation::Out => Orientation::In,
            Orientation::Clock => Orientation::Counter,
            Orientation::Counter => Orientation::Clock,
        }
    }
}

impl MotionType {
    /// Shift motions traverse two distinct locations (PRO, ANTI, FLOAT).
    pub fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MotionType::Static => "static",
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Float => "float",
            MotionType::Dash => "dash",
        }
    }
}

impl GridMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
            GridMode::Skewed => "skewed",
        }
    }
}

impl Default for GridMode {
    fn default() -> Self {
        GridMode::Diamond
    }
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

impl Turns {
    /// The string form used in placement-table keys: integral turns drop
    /// the decimal, the float sentinel renders as `fl`.
    pub fn as_key_str(self) -> &'static str {
        match self {
            Turns::Zero => "0",
            Turns::Half => "0.5",
            Turns::One => "1",
            Turns::OneAndHalf => "1.5",
            Turns::Two => "2",
            Turns::TwoAndHalf => "2.5",
            Turns::Three => "3",
            Turns::Float => "fl",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Turns::Float)
    }

    /// Whole-turn count, if this is a whole number of turns.
    pub fn whole(self) -> Option<u8> {
        match self {
            Turns::Zero => Some(0),
            Turns::One => Some(1),
            Turns::Two => Some(2),
            Turns::Three => Some(3),
            _ => None,
        }
    }

    pub fn is_half(self) -> bool {
        matches!(self, Turns::Half | Turns::OneAndHalf | Turns::TwoAndHalf)
    }

    /// For half turns: true when turns mod 2 == 0.5 (the 0.5/2.5 pattern),
    /// false for the 1.5 pattern.
    pub fn half_pattern_low(self) -> bool {
        matches!(self, Turns::Half | Turns::TwoAndHalf)
    }

    /// Parse a numeric turn count. Valid values are 0 to 3 in half steps.
    pub fn from_f64(value: f64) -> Option<Turns> {
        let half_steps = (value * 2.0).round();
        if (half_steps - value * 2.0).abs() > 1e-9 {
            return None;
        }
        match half_steps as i64 {
            0 => Some(Turns::Zero),
            1 => Some(Turns::Half),
            2 => Some(Turns::One),
            3 => Some(Turns::OneAndHalf),
            4 => Some(Turns::Two),
            5 => Some(Turns::TwoAndHalf),
            6 => Some(Turns::Three),
            _ => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Turns::Zero => 0.0,
            Turns::Half => 0.5,
            Turns::One => 1.0,
            Turns::OneAndHalf => 1.5,
            Turns::Two => 2.0,
            Turns::TwoAndHalf => 2.5,
            Turns::Three => 3.0,
            Turns::Float => f64::NAN,
        }
    }
}

impl std::fmt::Display for Turns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_key_str())
    }
}

impl Serialize for Turns {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Turns::Float => serializer.serialize_str("fl"),
            t if t.is_half() => serializer.serialize_f64(t.as_f64()),
            t => serializer.serialize_u64(u64::from(t.whole().unwrap_or(0))),
        }
    }
}

impl<'de> Deserialize<'de> for Turns {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TurnsVisitor;

        impl serde::de::Visitor<'_> for TurnsVisitor {
            type Value = Turns;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a turn count between 0 and 3 in half steps, or \"fl\"")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Turns, E> {
                Turns::from_f64(v as f64)
                    .ok_or_else(|| E::custom(format!("invalid turn count: {v}")))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Turns, E> {
                Turns::from_f64(v as f64)
                    .ok_or_else(|| E::custom(format!("invalid turn count: {v}")))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Turns, E> {
                Turns::from_f64(v)
                    .ok_or_else(|| E::custom(format!("invalid turn count: {v}")))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Turns, E> {
                match v {
                    "fl" => Ok(Turns::Float),
                    other => other
                        .parse::<f64>()
                        .ok()
                        .and_then(Turns::from_f64)
                        .ok_or_else(|| E::custom(format!("invalid turn count: '{other}'"))),
                }
            }
        }

        deserializer.deserialize_any(TurnsVisitor)
    }
}

impl MotionData {
    /// Copy of this motion with the end orientation filled in.
    pub fn with_end_orientation(&self, orientation: Orientation) -> MotionData {
        MotionData {
            end_orientation: Some(orientation),
            ..self.clone()
        }
    }
}

impl PictographData {
    /// The motion belonging to `color`.
    pub fn motion(&self, color: Color) -> &MotionData {
        match color {
            Color::Blue => &self.blue_motion,
            Color::Red => &self.red_motion,
        }
    }

    /// The other prop's motion.
    pub fn sibling(&self, color: Color) -> &MotionData {
        match color {
            Color::Blue => &self.red_motion,
            Color::Red => &self.blue_motion,
        }
    }
}

impl Adjustment {
    pub const ZERO: Adjustment = Adjustment { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Adjustment {
        Adjustment { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_round_trip_through_json() {
        let cases = [
            (Turns::Zero, "0"),
            (Turns::Half, "0.5"),
            (Turns::Two, "2"),
            (Turns::Float, "\"fl\""),
        ];
        for (turns, expected) in cases {
            let json = serde_json::to_string(&turns).unwrap();
            assert_eq!(json, expected);
            let back: Turns = serde_json::from_str(&json).unwrap();
            assert_eq!(back, turns);
        }
    }

    #[test]
    fn turns_rejects_out_of_range_values() {
        assert!(serde_json::from_str::<Turns>("3.5").is_err());
        assert!(serde_json::from_str::<Turns>("-1").is_err());
        assert!(serde_json::from_str::<Turns>("\"spin\"").is_err());
    }

    #[test]
    fn location_opposites_are_symmetric() {
        for loc in Location::ALL {
            assert_eq!(loc.opposite().opposite(), loc);
        }
    }
}
