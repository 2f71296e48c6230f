use serde::{Deserialize, Serialize};

use super::energy::EnergyBreakdown;
use crate::profile::BuildingProfile;

/// The two compared scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    BaseCase,
    Improved,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::BaseCase, Scenario::Improved];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::BaseCase => "Base Case",
            Scenario::Improved => "Improved",
        }
    }
}

/// One value per scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPair<T> {
    #[serde(rename = "Base Case")]
    pub base_case: T,
    #[serde(rename = "Improved")]
    pub improved: T,
}

impl<T> ScenarioPair<T> {
    pub fn new(base_case: T, improved: T) -> Self {
        Self {
            base_case,
            improved,
        }
    }

    pub fn get(&self, scenario: Scenario) -> &T {
        match scenario {
            Scenario::BaseCase => &self.base_case,
            Scenario::Improved => &self.improved,
        }
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> ScenarioPair<U> {
        ScenarioPair::new(f(&self.base_case), f(&self.improved))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Scenario, &T)> {
        Scenario::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

impl ScenarioPair<f64> {
    /// Base case minus improved.
    pub fn saving(&self) -> f64 {
        self.base_case - self.improved
    }
}

/// Energy use per end use for both scenarios, kWh/(m²·y).
pub type EnergyResult = ScenarioPair<EnergyBreakdown>;

/// Investment cost for both scenarios.
pub type CostResult = ScenarioPair<f64>;

/// Comparison of the improved investment cost against a budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetCheck {
    pub budget: f64,
    pub improved_cost: f64,
    pub within_budget: bool,
    /// `budget - improved_cost`; negative when over budget.
    pub headroom: f64,
}

impl BudgetCheck {
    pub fn new(budget: f64, improved_cost: f64) -> Self {
        Self {
            budget,
            improved_cost,
            within_budget: improved_cost <= budget,
            headroom: budget - improved_cost,
        }
    }
}

/// Output of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub profile: BuildingProfile,
    pub energy: EnergyResult,
    pub cost: CostResult,
    /// Annual consumption per scenario, kWh/(m²·y).
    pub total_consumption: ScenarioPair<f64>,
    /// Placeholder carbon saving figure, kg CO2/(m²·y).
    pub carbon_savings_kg_co2_per_m2: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetCheck>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_pair_access() {
        let pair: ScenarioPair<f64> = ScenarioPair::new(500.0, 250.0);
        assert!((pair.get(Scenario::BaseCase) - 500.0).abs() < 1e-10);
        assert!((pair.get(Scenario::Improved) - 250.0).abs() < 1e-10);
        assert!((pair.saving() - 250.0).abs() < 1e-10);

        let labels: Vec<&str> = pair.iter().map(|(s, _)| s.label()).collect();
        assert_eq!(labels, vec!["Base Case", "Improved"]);
    }

    #[test]
    fn test_scenario_pair_json_labels() {
        let json = serde_json::to_string(&ScenarioPair::new(500.0, 300.0)).unwrap();
        assert_eq!(json, r#"{"Base Case":500.0,"Improved":300.0}"#);
    }

    #[test]
    fn test_budget_check() {
        let ok = BudgetCheck::new(300.0, 250.0);
        assert!(ok.within_budget);
        assert!((ok.headroom - 50.0).abs() < 1e-10);

        let over = BudgetCheck::new(200.0, 250.0);
        assert!(!over.within_budget);
        assert!((over.headroom + 50.0).abs() < 1e-10);

        assert!(BudgetCheck::new(250.0, 250.0).within_budget);
    }
}
