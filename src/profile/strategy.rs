use serde::{Deserialize, Serialize};

use super::Choice;
use super::choice::impl_choice;
use crate::model::EstimationError;
use crate::model::error::check_percent;

/// One of the five efficiency strategy levers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lever {
    ThermalEnvelope,
    HeatingSystem,
    VentilationSystem,
    RenewableEnergy,
    BuildingOperation,
}

impl_choice!(Lever, "strategy lever", [
    ThermalEnvelope => "thermal_envelope",
    HeatingSystem => "heating_system",
    VentilationSystem => "ventilation_system",
    RenewableEnergy => "renewable_energy",
    BuildingOperation => "building_operation",
]);

impl Lever {
    /// Number of levers; the cost model spreads the base cost over `COUNT * 100` points.
    pub const COUNT: usize = 5;

    /// Slider caption of the lever.
    pub fn caption(&self) -> &'static str {
        match self {
            Self::ThermalEnvelope => "Thermal envelope improvement",
            Self::HeatingSystem => "Heating system efficiency",
            Self::VentilationSystem => "Ventilation system efficiency",
            Self::RenewableEnergy => "Renewable energy supply",
            Self::BuildingOperation => "Improved building operation",
        }
    }
}

/// Percentages (0..=100) of the five efficiency strategies.
///
/// Each lever is an independent damping factor. Values are checked on every
/// construction path, including deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StrategyMixFields")]
pub struct StrategyMix {
    thermal_envelope: f64,
    heating_system: f64,
    ventilation_system: f64,
    renewable_energy: f64,
    building_operation: f64,
}

#[derive(Deserialize)]
struct StrategyMixFields {
    thermal_envelope: f64,
    heating_system: f64,
    ventilation_system: f64,
    renewable_energy: f64,
    building_operation: f64,
}

impl TryFrom<StrategyMixFields> for StrategyMix {
    type Error = EstimationError;

    fn try_from(f: StrategyMixFields) -> Result<Self, Self::Error> {
        Self::new(
            f.thermal_envelope,
            f.heating_system,
            f.ventilation_system,
            f.renewable_energy,
            f.building_operation,
        )
    }
}

impl StrategyMix {
    /// Default slider position of every lever.
    pub const DEFAULT_PERCENT: f64 = 50.0;

    pub fn new(
        thermal_envelope: f64,
        heating_system: f64,
        ventilation_system: f64,
        renewable_energy: f64,
        building_operation: f64,
    ) -> Result<Self, EstimationError> {
        Ok(Self {
            thermal_envelope: check_percent("thermal_envelope", thermal_envelope)?,
            heating_system: check_percent("heating_system", heating_system)?,
            ventilation_system: check_percent("ventilation_system", ventilation_system)?,
            renewable_energy: check_percent("renewable_energy", renewable_energy)?,
            building_operation: check_percent("building_operation", building_operation)?,
        })
    }

    /// Every lever at the same percentage.
    pub fn uniform(percent: f64) -> Result<Self, EstimationError> {
        Self::new(percent, percent, percent, percent, percent)
    }

    /// No strategy applied.
    pub fn none() -> Self {
        Self {
            thermal_envelope: 0.0,
            heating_system: 0.0,
            ventilation_system: 0.0,
            renewable_energy: 0.0,
            building_operation: 0.0,
        }
    }

    pub fn get(&self, lever: Lever) -> f64 {
        match lever {
            Lever::ThermalEnvelope => self.thermal_envelope,
            Lever::HeatingSystem => self.heating_system,
            Lever::VentilationSystem => self.ventilation_system,
            Lever::RenewableEnergy => self.renewable_energy,
            Lever::BuildingOperation => self.building_operation,
        }
    }

    /// Returns a copy with one lever set to `percent`.
    pub fn with(mut self, lever: Lever, percent: f64) -> Result<Self, EstimationError> {
        let value = check_percent(lever.label(), percent)?;
        let slot = match lever {
            Lever::ThermalEnvelope => &mut self.thermal_envelope,
            Lever::HeatingSystem => &mut self.heating_system,
            Lever::VentilationSystem => &mut self.ventilation_system,
            Lever::RenewableEnergy => &mut self.renewable_energy,
            Lever::BuildingOperation => &mut self.building_operation,
        };
        *slot = value;
        Ok(self)
    }

    /// Sum of all five percentages (0..=500).
    pub fn sum(&self) -> f64 {
        Lever::ALL.iter().map(|&l| self.get(l)).sum()
    }

    /// Remaining fraction `1 - p/100` of a lever.
    pub fn retained(&self, lever: Lever) -> f64 {
        1.0 - self.get(lever) / 100.0
    }

    pub fn thermal_envelope(&self) -> f64 {
        self.thermal_envelope
    }

    pub fn heating_system(&self) -> f64 {
        self.heating_system
    }

    pub fn ventilation_system(&self) -> f64 {
        self.ventilation_system
    }

    pub fn renewable_energy(&self) -> f64 {
        self.renewable_energy
    }

    pub fn building_operation(&self) -> f64 {
        self.building_operation
    }
}

impl Default for StrategyMix {
    fn default() -> Self {
        Self {
            thermal_envelope: Self::DEFAULT_PERCENT,
            heating_system: Self::DEFAULT_PERCENT,
            ventilation_system: Self::DEFAULT_PERCENT,
            renewable_energy: Self::DEFAULT_PERCENT,
            building_operation: Self::DEFAULT_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mix_is_fifty_percent() {
        let mix = StrategyMix::default();
        for &lever in Lever::ALL {
            assert!((mix.get(lever) - 50.0).abs() < 1e-10);
        }
        assert!((mix.sum() - 250.0).abs() < 1e-10);
    }

    #[test]
    fn test_new_rejects_out_of_domain() {
        let err = StrategyMix::new(10.0, 101.0, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            EstimationError::DomainViolation {
                field: "heating_system",
                ..
            }
        ));
        assert!(StrategyMix::new(-1.0, 0.0, 0.0, 0.0, 0.0).is_err());
        assert!(StrategyMix::uniform(f64::NAN).is_err());
    }

    #[test]
    fn test_with_changes_one_lever() {
        let mix = StrategyMix::none()
            .with(Lever::VentilationSystem, 30.0)
            .unwrap();
        assert!((mix.ventilation_system() - 30.0).abs() < 1e-10);
        assert!((mix.sum() - 30.0).abs() < 1e-10);
        assert!((mix.retained(Lever::VentilationSystem) - 0.7).abs() < 1e-10);
        assert!(mix.with(Lever::RenewableEnergy, 150.0).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: StrategyMix = serde_json::from_str(
            r#"{"thermal_envelope":10,"heating_system":20,"ventilation_system":30,
                "renewable_energy":40,"building_operation":50}"#,
        )
        .unwrap();
        assert!((ok.renewable_energy() - 40.0).abs() < 1e-10);

        let bad = serde_json::from_str::<StrategyMix>(
            r#"{"thermal_envelope":10,"heating_system":20,"ventilation_system":300,
                "renewable_energy":40,"building_operation":50}"#,
        );
        let msg = bad.unwrap_err().to_string();
        assert!(msg.contains("ventilation_system"), "unexpected error: {msg}");
    }

    #[test]
    fn test_lever_ordinals_follow_all() {
        assert_eq!(Lever::ALL.len(), Lever::COUNT);
        for (i, lever) in Lever::ALL.iter().enumerate() {
            assert_eq!(lever.ordinal(), i, "{lever:?}");
        }
    }

    #[test]
    fn test_lever_labels_parse() {
        assert_eq!("heating_system".parse::<Lever>(), Ok(Lever::HeatingSystem));
        assert_eq!(Lever::BuildingOperation.to_string(), "building_operation");
        assert!("solar".parse::<Lever>().is_err());
    }
}
