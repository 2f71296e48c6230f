//! End-use energy breakdown and the strategy damping model.

use serde::{Deserialize, Serialize};

use crate::profile::{Lever, StrategyMix};

/// Energy end uses shown as segments of the stacked consumption bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndUse {
    Heating,
    Cooling,
    Other,
}

impl EndUse {
    pub const ALL: [EndUse; 3] = [EndUse::Heating, EndUse::Cooling, EndUse::Other];

    pub fn label(&self) -> &'static str {
        match self {
            EndUse::Heating => "Heating",
            EndUse::Cooling => "Cooling",
            EndUse::Other => "Other",
        }
    }
}

/// Energy consumption per end use in kWh/(m²·y).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnergyBreakdown {
    pub heating: f64,
    pub cooling: f64,
    pub other: f64,
}

impl EnergyBreakdown {
    pub const fn new(heating: f64, cooling: f64, other: f64) -> Self {
        Self {
            heating,
            cooling,
            other,
        }
    }

    pub fn get(&self, end_use: EndUse) -> f64 {
        match end_use {
            EndUse::Heating => self.heating,
            EndUse::Cooling => self.cooling,
            EndUse::Other => self.other,
        }
    }

    /// Multiplies every end use by the same factor.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            self.heating * factor,
            self.cooling * factor,
            self.other * factor,
        )
    }

    /// Annual total over all end uses.
    pub fn total(&self) -> f64 {
        self.heating + self.cooling + self.other
    }

    pub fn iter(&self) -> impl Iterator<Item = (EndUse, f64)> + '_ {
        EndUse::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    pub(crate) fn is_valid(&self) -> bool {
        [self.heating, self.cooling, self.other]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Applies the strategy mix to an adjusted baseline.
///
/// ```text
/// Heating' = Heating * (1 - heating_system/100) * (1 - thermal_envelope/100)
/// Cooling' = Cooling * (1 - ventilation_system/100) * (1 - thermal_envelope/100)
/// Other'   = Other * (1 - building_operation/100)
/// ```
///
/// The renewable energy lever does not reduce consumption; it only enters
/// the investment cost.
pub fn compute_improved(adjusted_baseline: EnergyBreakdown, mix: &StrategyMix) -> EnergyBreakdown {
    let envelope = mix.retained(Lever::ThermalEnvelope);
    EnergyBreakdown::new(
        adjusted_baseline.heating * mix.retained(Lever::HeatingSystem) * envelope,
        adjusted_baseline.cooling * mix.retained(Lever::VentilationSystem) * envelope,
        adjusted_baseline.other * mix.retained(Lever::BuildingOperation),
    )
}

/// Annual consumption summed over the three end uses.
pub fn compute_total_consumption(energy: EnergyBreakdown) -> f64 {
    energy.total()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFICE: EnergyBreakdown = EnergyBreakdown::new(150.0, 80.0, 50.0);

    #[test]
    fn test_zero_mix_is_identity() {
        let improved = compute_improved(OFFICE, &StrategyMix::none());
        assert_eq!(improved, OFFICE);
    }

    #[test]
    fn test_half_mix() {
        let improved = compute_improved(OFFICE, &StrategyMix::uniform(50.0).unwrap());
        assert!((improved.heating - 37.5).abs() < 1e-10);
        assert!((improved.cooling - 20.0).abs() < 1e-10);
        assert!((improved.other - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_full_levers_eliminate_end_uses() {
        let mix = StrategyMix::new(100.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        let improved = compute_improved(OFFICE, &mix);
        assert_eq!(improved.heating, 0.0);
        assert_eq!(improved.cooling, 0.0);
        assert!((improved.other - 50.0).abs() < 1e-10);

        let mix = StrategyMix::new(0.0, 0.0, 0.0, 0.0, 100.0).unwrap();
        let improved = compute_improved(OFFICE, &mix);
        assert_eq!(improved.other, 0.0);
        assert!((improved.heating - 150.0).abs() < 1e-10);
    }

    #[test]
    fn test_renewable_energy_does_not_change_consumption() {
        let mix = StrategyMix::new(0.0, 0.0, 0.0, 100.0, 0.0).unwrap();
        assert_eq!(compute_improved(OFFICE, &mix), OFFICE);
    }

    #[test]
    fn test_total_consumption() {
        assert!((compute_total_consumption(OFFICE) - 280.0).abs() < 1e-10);
        assert!((compute_total_consumption(EnergyBreakdown::default())).abs() < 1e-10);
    }

    #[test]
    fn test_breakdown_json_keys() {
        let json = serde_json::to_string(&EnergyBreakdown::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, r#"{"Heating":1.0,"Cooling":2.0,"Other":3.0}"#);
    }
}
