use serde::{Deserialize, Serialize};

use super::EstimationError;
use super::config::{BaselineSource, EstimationConfig};
use super::energy::{EnergyBreakdown, compute_improved, compute_total_consumption};
use super::result::{BudgetCheck, Estimate, ScenarioPair};
use crate::profile::{CaseStudy, Choice, Lever};

/// Effect of raising one lever, holding the others fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeverAdvice {
    pub lever: Lever,
    /// Current percentage.
    pub from_percent: f64,
    /// Percentage after the step (capped at 100).
    pub to_percent: f64,
    /// Drop of the improved annual consumption, kWh/(m²·y).
    pub energy_saving: f64,
    /// Change of the improved investment cost (negative = cheaper).
    pub cost_change: f64,
}

/// Evaluates case studies against one configuration.
///
/// Evaluation is a pure function of the configuration and the case; it
/// holds no state between calls and may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimationConfig,
}

impl Estimator {
    pub fn new(config: EstimationConfig) -> Result<Self, EstimationError> {
        config.validate()?;
        if let BaselineSource::Fixed(baseline) = config.baseline_source {
            tracing::info!(
                baseline_total = baseline.total(),
                "fixed baseline in use, building type ignored"
            );
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimationConfig {
        &self.config
    }

    /// Energy for both scenarios.
    pub fn energy(&self, case: &CaseStudy) -> ScenarioPair<EnergyBreakdown> {
        let base = self.config.adjusted_baseline(&case.profile);
        ScenarioPair::new(base, compute_improved(base, &case.strategies))
    }

    pub fn evaluate(&self, case: &CaseStudy) -> Estimate {
        let energy = self.energy(case);
        let cost = self.config.cost.compute_investment_cost(&case.strategies);
        let total_consumption = energy.map(|e| compute_total_consumption(*e));
        let budget = case.budget().map(|b| BudgetCheck::new(b, cost.improved));

        tracing::debug!(
            profile = %case.profile,
            base_total = total_consumption.base_case,
            improved_total = total_consumption.improved,
            improved_cost = cost.improved,
            "evaluated case study"
        );

        Estimate {
            profile: case.profile,
            energy,
            cost,
            total_consumption,
            carbon_savings_kg_co2_per_m2: self.config.carbon_savings_kg_co2_per_m2,
            budget,
        }
    }

    /// Ranks the levers by the consumption saved when each is raised by `step`
    /// percentage points (capped at 100).
    ///
    /// Sorted by energy saving, largest first; ties keep lever order.
    pub fn advise(
        &self,
        case: &CaseStudy,
        step: f64,
    ) -> Result<Vec<LeverAdvice>, EstimationError> {
        if !(step > 0.0 && step <= 100.0) {
            return Err(EstimationError::domain(
                "advice step",
                step,
                "expected 0 < step <= 100",
            ));
        }

        let base = self.config.adjusted_baseline(&case.profile);
        let current_energy = compute_improved(base, &case.strategies).total();
        let current_cost = self
            .config
            .cost
            .compute_investment_cost(&case.strategies)
            .improved;

        let mut advice = Vec::with_capacity(Lever::COUNT);
        for &lever in Lever::ALL {
            let from_percent = case.strategies.get(lever);
            let to_percent = (from_percent + step).min(100.0);
            let raised = case.strategies.with(lever, to_percent)?;
            advice.push(LeverAdvice {
                lever,
                from_percent,
                to_percent,
                energy_saving: current_energy - compute_improved(base, &raised).total(),
                cost_change: self.config.cost.compute_investment_cost(&raised).improved
                    - current_cost,
            });
        }
        advice.sort_by(|a, b| b.energy_saving.total_cmp(&a.energy_saving));
        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BuildingProfile, StrategyMix};

    fn office_berlin_east(mix: StrategyMix) -> CaseStudy {
        let profile =
            BuildingProfile::from_labels("Office", "Berlin", "Commercial", "East").unwrap();
        CaseStudy::new(profile, mix)
    }

    #[test]
    fn test_evaluate_worked_example() {
        let est = Estimator::default().evaluate(&office_berlin_east(StrategyMix::default()));

        assert_eq!(est.energy.base_case, EnergyBreakdown::new(150.0, 80.0, 50.0));
        assert!((est.energy.improved.heating - 37.5).abs() < 1e-10);
        assert!((est.energy.improved.cooling - 20.0).abs() < 1e-10);
        assert!((est.energy.improved.other - 25.0).abs() < 1e-10);
        assert!((est.cost.base_case - 500.0).abs() < 1e-10);
        assert!((est.cost.improved - 250.0).abs() < 1e-10);
        assert!((est.total_consumption.base_case - 280.0).abs() < 1e-10);
        assert!((est.total_consumption.improved - 82.5).abs() < 1e-10);
        assert!((est.carbon_savings_kg_co2_per_m2 - 20.0).abs() < 1e-10);
        assert!(est.budget.is_none());
    }

    #[test]
    fn test_evaluate_with_budget() {
        let case = office_berlin_east(StrategyMix::uniform(20.0).unwrap())
            .with_budget(Some(350.0))
            .unwrap();
        let est = Estimator::default().evaluate(&case);
        let check = est.budget.unwrap();
        assert!((check.improved_cost - 300.0).abs() < 1e-10);
        assert!(check.within_budget);
        assert!((check.headroom - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_simplified_mode() {
        let est = Estimator::new(EstimationConfig::simplified())
            .unwrap()
            .evaluate(&office_berlin_east(StrategyMix::none()));
        assert_eq!(est.energy.base_case, BaselineSource::SIMPLIFIED);
        assert_eq!(est.energy.improved, BaselineSource::SIMPLIFIED);
        assert!((est.total_consumption.base_case - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = EstimationConfig::new();
        config.carbon_savings_kg_co2_per_m2 = f64::NAN;
        assert!(Estimator::new(config).is_err());
    }

    #[test]
    fn test_new_rejects_negative_table_factor() {
        let mut config = EstimationConfig::new();
        config.tables.climate_factor = crate::model::EnumTable::from_fn(|_| -2.0);
        let err = Estimator::new(config).unwrap_err();
        assert!(matches!(
            err,
            EstimationError::DomainViolation {
                field: "climate_factor",
                ..
            }
        ));
    }

    #[test]
    fn test_advise_ranks_levers() {
        let case = office_berlin_east(StrategyMix::none());
        let advice = Estimator::default().advise(&case, 10.0).unwrap();
        assert_eq!(advice.len(), 5);

        // Envelope damps heating and cooling: 0.1 * (150 + 80) = 23
        assert_eq!(advice[0].lever, Lever::ThermalEnvelope);
        assert!((advice[0].energy_saving - 23.0).abs() < 1e-9);
        assert_eq!(advice[1].lever, Lever::HeatingSystem);
        assert!((advice[1].energy_saving - 15.0).abs() < 1e-9);
        assert_eq!(advice[2].lever, Lever::VentilationSystem);
        assert_eq!(advice[3].lever, Lever::BuildingOperation);
        assert_eq!(advice[4].lever, Lever::RenewableEnergy);
        assert!(advice[4].energy_saving.abs() < 1e-12);

        for a in &advice {
            assert!((a.cost_change + 10.0).abs() < 1e-9);
            assert!((a.to_percent - 10.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_advise_caps_at_full_lever() {
        let mix = StrategyMix::none().with(Lever::HeatingSystem, 95.0).unwrap();
        let advice = Estimator::default()
            .advise(&office_berlin_east(mix), 10.0)
            .unwrap();
        let heating = advice
            .iter()
            .find(|a| a.lever == Lever::HeatingSystem)
            .unwrap();
        assert!((heating.to_percent - 100.0).abs() < 1e-10);
        assert!((heating.cost_change + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_advise_rejects_bad_step() {
        let case = CaseStudy::default();
        assert!(Estimator::default().advise(&case, 0.0).is_err());
        assert!(Estimator::default().advise(&case, 150.0).is_err());
        assert!(Estimator::default().advise(&case, f64::NAN).is_err());
    }
}
