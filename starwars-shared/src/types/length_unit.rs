//! Length units accepted by the `height` and `length` fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conversion factor from meters to feet.
pub const FEET_PER_METER: f64 = 3.28084;

/// Units a stored metric length can be expressed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LengthUnit {
    /// The standard unit around the world.
    #[default]
    Meter,
    /// Primarily used in the United States.
    Foot,
}

impl LengthUnit {
    /// The unit's name as spelled in queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "METER",
            LengthUnit::Foot => "FOOT",
        }
    }

    /// Express a length stored in meters in this unit.
    pub fn convert(&self, meters: f64) -> f64 {
        match self {
            LengthUnit::Meter => meters,
            LengthUnit::Foot => meters * FEET_PER_METER,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "METER" => Ok(LengthUnit::Meter),
            "FOOT" => Ok(LengthUnit::Foot),
            other => Err(format!("{} is not a valid LengthUnit", other)),
        }
    }
}
