use serde::{Deserialize, Serialize};

use super::result::CostResult;
use crate::profile::{Lever, StrategyMix};

/// Linear investment cost model.
///
/// Every percentage point on any lever lowers the improved cost by
/// `base_cost / (5 * 100)`, so all five levers at 100 give zero. The result
/// is clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Investment cost of the base case.
    pub base_cost: f64,
}

impl CostModel {
    pub const DEFAULT_BASE_COST: f64 = 500.0;

    pub fn new() -> Self {
        Self {
            base_cost: Self::DEFAULT_BASE_COST,
        }
    }

    pub fn compute_investment_cost(&self, mix: &StrategyMix) -> CostResult {
        let total_points = (Lever::COUNT as f64) * 100.0;
        let improved = self.base_cost * (1.0 - mix.sum() / total_points);
        CostResult::new(self.base_cost, improved.max(0.0))
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Investment cost with the default base cost of 500.
pub fn compute_investment_cost(mix: &StrategyMix) -> CostResult {
    CostModel::new().compute_investment_cost(mix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_examples() {
        let c = compute_investment_cost(&StrategyMix::uniform(50.0).unwrap());
        assert!((c.base_case - 500.0).abs() < 1e-10);
        assert!((c.improved - 250.0).abs() < 1e-10);

        let c = compute_investment_cost(&StrategyMix::none());
        assert!((c.improved - 500.0).abs() < 1e-10);

        let c = compute_investment_cost(&StrategyMix::uniform(100.0).unwrap());
        assert_eq!(c.improved, 0.0);
    }

    #[test]
    fn test_each_point_is_one_five_hundredth() {
        let mix = StrategyMix::none().with(Lever::RenewableEnergy, 1.0).unwrap();
        let c = compute_investment_cost(&mix);
        assert!((c.improved - 499.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_base_cost() {
        let model = CostModel { base_cost: 1000.0 };
        let c = model.compute_investment_cost(&StrategyMix::uniform(20.0).unwrap());
        assert!((c.base_case - 1000.0).abs() < 1e-10);
        assert!((c.improved - 800.0).abs() < 1e-10);
    }
}
