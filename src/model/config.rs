use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::EstimationError;
use super::cost::CostModel;
use super::energy::EnergyBreakdown;
use super::error::check_non_negative;
use super::table::EnumTable;
use crate::profile::{BuildingProfile, BuildingType, Choice, ClimateScenario, Orientation};

/// Static reference data of the model.
///
/// All values are demonstration placeholders. Tables are complete by
/// construction; loading a table that lacks an option fails with
/// `UnknownKey`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReferenceTablesFile", into = "ReferenceTablesFile")]
pub struct ReferenceTables {
    /// Baseline consumption per end use, kWh/(m²·y).
    pub base_energy: EnumTable<BuildingType, EnergyBreakdown>,
    /// Dimensionless climate multiplier, 1.0 = neutral reference.
    pub climate_factor: EnumTable<ClimateScenario, f64>,
    /// Dimensionless facade orientation multiplier, 1.0 = neutral reference.
    pub orientation_factor: EnumTable<Orientation, f64>,
}

/// On-disk form of [`ReferenceTables`]: label-keyed maps.
#[derive(Serialize, Deserialize)]
struct ReferenceTablesFile {
    base_energy_by_building_type: BTreeMap<BuildingType, EnergyBreakdown>,
    climate_factor: BTreeMap<ClimateScenario, f64>,
    orientation_factor: BTreeMap<Orientation, f64>,
}

impl TryFrom<ReferenceTablesFile> for ReferenceTables {
    type Error = EstimationError;

    fn try_from(f: ReferenceTablesFile) -> Result<Self, Self::Error> {
        Self::from_entries(
            f.base_energy_by_building_type,
            f.climate_factor,
            f.orientation_factor,
        )
    }
}

impl From<ReferenceTables> for ReferenceTablesFile {
    fn from(t: ReferenceTables) -> Self {
        Self {
            base_energy_by_building_type: t.base_energy.to_map(),
            climate_factor: t.climate_factor.to_map(),
            orientation_factor: t.orientation_factor.to_map(),
        }
    }
}

impl ReferenceTables {
    pub fn new() -> Self {
        Self {
            base_energy: EnumTable::from_fn(|b| match b {
                BuildingType::Dormitory => EnergyBreakdown::new(120.0, 60.0, 40.0),
                BuildingType::Office => EnergyBreakdown::new(150.0, 80.0, 50.0),
                BuildingType::Hotel => EnergyBreakdown::new(180.0, 100.0, 70.0),
                BuildingType::Hospital => EnergyBreakdown::new(250.0, 150.0, 120.0),
                BuildingType::School => EnergyBreakdown::new(130.0, 50.0, 40.0),
            }),
            climate_factor: EnumTable::from_fn(|c| match c {
                ClimateScenario::Vilnius => 1.2,
                ClimateScenario::Berlin => 1.0,
                ClimateScenario::Paris => 0.95,
                ClimateScenario::Madrid => 0.85,
                ClimateScenario::Rome => 0.9,
            }),
            orientation_factor: EnumTable::from_fn(|o| match o {
                Orientation::North => 1.1,
                Orientation::South => 0.9,
                Orientation::East => 1.0,
                Orientation::West => 1.0,
            }),
        }
    }

    /// Builds tables from key/value entries and checks the values.
    ///
    /// Every option must have an entry; baselines and factors must be finite
    /// and non-negative.
    pub fn from_entries(
        base_energy: impl IntoIterator<Item = (BuildingType, EnergyBreakdown)>,
        climate_factor: impl IntoIterator<Item = (ClimateScenario, f64)>,
        orientation_factor: impl IntoIterator<Item = (Orientation, f64)>,
    ) -> Result<Self, EstimationError> {
        let tables = Self {
            base_energy: EnumTable::from_entries(base_energy)?,
            climate_factor: EnumTable::from_entries(climate_factor)?,
            orientation_factor: EnumTable::from_entries(orientation_factor)?,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Checks that every baseline and factor is finite and non-negative.
    pub fn validate(&self) -> Result<(), EstimationError> {
        for (_, e) in self.base_energy.iter() {
            for (_, v) in e.iter() {
                check_non_negative("base_energy_by_building_type", v)?;
            }
        }
        for (_, &f) in self.climate_factor.iter() {
            check_non_negative("climate_factor", f)?;
        }
        for (_, &f) in self.orientation_factor.iter() {
            check_non_negative("orientation_factor", f)?;
        }
        Ok(())
    }

    /// Baseline of `building_type` scaled by the climate and orientation factors.
    pub fn compute_adjusted_baseline(
        &self,
        building_type: BuildingType,
        climate_scenario: ClimateScenario,
        orientation: Orientation,
    ) -> EnergyBreakdown {
        self.adjust(self.base_energy[building_type], climate_scenario, orientation)
    }

    /// Scales any baseline by the climate and orientation factors.
    pub fn adjust(
        &self,
        baseline: EnergyBreakdown,
        climate_scenario: ClimateScenario,
        orientation: Orientation,
    ) -> EnergyBreakdown {
        baseline
            .scale(self.climate_factor[climate_scenario])
            .scale(self.orientation_factor[orientation])
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the unadjusted baseline comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineSource {
    /// Look the baseline up by building type.
    #[default]
    ByBuildingType,
    /// Use one baseline for every building type.
    Fixed(EnergyBreakdown),
}

impl BaselineSource {
    /// Fixed baseline of the simplified demo mode.
    pub const SIMPLIFIED: EnergyBreakdown = EnergyBreakdown::new(100.0, 50.0, 30.0);

    pub fn simplified() -> Self {
        Self::Fixed(Self::SIMPLIFIED)
    }
}

/// Configuration of the estimation model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    pub tables: ReferenceTables,
    pub baseline_source: BaselineSource,
    pub cost: CostModel,
    /// Carbon emission saving reported with every estimate, kg CO2/(m²·y).
    pub carbon_savings_kg_co2_per_m2: f64,
}

impl EstimationConfig {
    pub const DEFAULT_CARBON_SAVINGS: f64 = 20.0;

    pub fn new() -> Self {
        Self {
            tables: ReferenceTables::new(),
            baseline_source: BaselineSource::ByBuildingType,
            cost: CostModel::new(),
            carbon_savings_kg_co2_per_m2: Self::DEFAULT_CARBON_SAVINGS,
        }
    }

    /// Default configuration in simplified demo mode.
    pub fn simplified() -> Self {
        Self {
            baseline_source: BaselineSource::simplified(),
            ..Self::new()
        }
    }

    /// Checks the tables and the scalar settings.
    pub fn validate(&self) -> Result<(), EstimationError> {
        self.tables.validate()?;
        check_non_negative("cost.base_cost", self.cost.base_cost)?;
        check_non_negative(
            "carbon_savings_kg_co2_per_m2",
            self.carbon_savings_kg_co2_per_m2,
        )?;
        if let BaselineSource::Fixed(e) = self.baseline_source
            && !e.is_valid()
        {
            return Err(EstimationError::domain(
                "baseline_source",
                e.total(),
                "expected finite end uses >= 0",
            ));
        }
        Ok(())
    }

    /// Adjusted baseline of a profile, honouring [`BaselineSource`].
    pub fn adjusted_baseline(&self, profile: &BuildingProfile) -> EnergyBreakdown {
        match self.baseline_source {
            BaselineSource::ByBuildingType => self.tables.compute_adjusted_baseline(
                profile.building_type,
                profile.climate_scenario,
                profile.orientation,
            ),
            BaselineSource::Fixed(baseline) => {
                tracing::debug!(
                    building_type = profile.building_type.label(),
                    "fixed baseline in use, building type ignored"
                );
                self.tables
                    .adjust(baseline, profile.climate_scenario, profile.orientation)
            }
        }
    }
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self::new()
    }
}
