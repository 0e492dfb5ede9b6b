use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::ParseError;

pub const KG_PER_POUND: f64 = 0.453592;
pub const CM_PER_INCH: f64 = 2.54;

/// Scales `lb / in²` to `kg / m²`.
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Parses a unit system name, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Result<Self, ParseError> {
        Self::from_str(label.trim()).map_err(|_| ParseError::UnitSystem(label.trim().to_owned()))
    }

    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    pub fn height_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "in",
        }
    }

    pub fn weight_to_kg(&self, weight: f64) -> f64 {
        match self {
            UnitSystem::Metric => weight,
            UnitSystem::Imperial => weight * KG_PER_POUND,
        }
    }

    pub fn height_to_m(&self, height: f64) -> f64 {
        match self {
            UnitSystem::Metric => height,
            UnitSystem::Imperial => height * CM_PER_INCH / 100.0,
        }
    }
}
