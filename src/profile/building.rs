//! Building case selections.
//!
//! Every selection is a closed enum, so a `BuildingProfile` can only hold
//! options that the reference tables are guaranteed to cover.

use serde::{Deserialize, Serialize};

use super::Choice;
use super::choice::impl_choice;
use crate::model::EstimationError;

/// Use of the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    Dormitory,
    Office,
    Hotel,
    Hospital,
    School,
}

impl_choice!(BuildingType, "building type", [
    Dormitory => "Dormitory",
    Office => "Office",
    Hotel => "Hotel",
    Hospital => "Hospital",
    School => "School",
]);

/// European city whose climate the case is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClimateScenario {
    Vilnius,
    Berlin,
    Paris,
    Madrid,
    Rome,
}

impl_choice!(ClimateScenario, "climate scenario", [
    Vilnius => "Vilnius",
    Berlin => "Berlin",
    Paris => "Paris",
    Madrid => "Madrid",
    Rome => "Rome",
]);

/// Building archetype. Carried with the profile, not used by any formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Residential,
    Commercial,
    Industrial,
    Public,
}

impl_choice!(Archetype, "archetype", [
    Residential => "Residential",
    Commercial => "Commercial",
    Industrial => "Industrial",
    Public => "Public",
]);

/// Orientation of the main facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl_choice!(Orientation, "orientation", [
    North => "North",
    South => "South",
    East => "East",
    West => "West",
]);

/// The building half of a case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildingProfile {
    pub building_type: BuildingType,
    pub climate_scenario: ClimateScenario,
    pub archetype: Archetype,
    pub orientation: Orientation,
}

impl BuildingProfile {
    pub fn new(
        building_type: BuildingType,
        climate_scenario: ClimateScenario,
        archetype: Archetype,
        orientation: Orientation,
    ) -> Self {
        Self {
            building_type,
            climate_scenario,
            archetype,
            orientation,
        }
    }

    /// Builds a profile from display labels, failing on the first unknown one.
    pub fn from_labels(
        building_type: &str,
        climate_scenario: &str,
        archetype: &str,
        orientation: &str,
    ) -> Result<Self, EstimationError> {
        Ok(Self {
            building_type: building_type.parse()?,
            climate_scenario: climate_scenario.parse()?,
            archetype: archetype.parse()?,
            orientation: orientation.parse()?,
        })
    }
}

impl Default for BuildingProfile {
    /// First option of every set.
    fn default() -> Self {
        Self::new(
            BuildingType::ALL[0],
            ClimateScenario::ALL[0],
            Archetype::ALL[0],
            Orientation::ALL[0],
        )
    }
}

impl std::fmt::Display for BuildingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}-facing",
            self.building_type, self.climate_scenario, self.archetype, self.orientation
        )
    }
}
