use std::str::FromStr;

use num_derive::FromPrimitive;
use strum::{Display, EnumIter, EnumString};

use crate::{units::UnitSystem, ParseError};

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn from_label(label: &str) -> Result<Self, ParseError> {
        Self::from_str(label.trim()).map_err(|_| ParseError::Gender(label.trim().to_owned()))
    }
}

/// Physical activity level, numbered 1 (least active) to 5 (most active).
#[derive(
    Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, FromPrimitive, Hash, PartialEq,
)]
pub enum ActivityLevel {
    #[default]
    Sedentary = 1,
    #[strum(serialize = "Lightly Active")]
    LightlyActive = 2,
    #[strum(serialize = "Moderately Active")]
    ModeratelyActive = 3,
    #[strum(serialize = "Very Active")]
    VeryActive = 4,
    #[strum(serialize = "Extremely Active")]
    ExtremelyActive = 5,
}

impl ActivityLevel {
    /// Looks a level up by its exact label. Anything unrecognized is treated
    /// as the most active level.
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label).unwrap_or(ActivityLevel::ExtremelyActive)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        num::FromPrimitive::from_u8(index)
    }

    /// Factor applied to the basal metabolic rate to estimate daily energy needs.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    age: u32,
    gender: Gender,
    weight: f64,
    height: f64,
    unit_system: UnitSystem,
    activity_level: ActivityLevel,
}

impl User {
    pub fn new(
        age: u32,
        gender: Gender,
        weight: f64,
        height: f64,
        unit_system: UnitSystem,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age,
            gender,
            weight,
            height,
            unit_system,
            activity_level,
        }
    }
    pub fn age(&self) -> u32 {
        self.age
    }
    pub fn gender(&self) -> Gender {
        self.gender
    }
    /// Weight in the user's own unit system.
    pub fn weight(&self) -> f64 {
        self.weight
    }
    /// Height in the user's own unit system.
    pub fn height(&self) -> f64 {
        self.height
    }
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }
    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }
    pub fn weight_kg(&self) -> f64 {
        self.unit_system.weight_to_kg(self.weight)
    }
    pub fn height_m(&self) -> f64 {
        self.unit_system.height_to_m(self.height)
    }
    pub fn height_cm(&self) -> f64 {
        self.height_m() * 100.0
    }
}
