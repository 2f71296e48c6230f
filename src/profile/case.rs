use serde::{Deserialize, Serialize};

use super::{BuildingProfile, StrategyMix};
use crate::model::EstimationError;
use crate::model::error::check_non_negative;

/// Complete input of one evaluation: the building, the strategy mix and an
/// optional investment budget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CaseStudyFields")]
pub struct CaseStudy {
    pub profile: BuildingProfile,
    pub strategies: StrategyMix,
    budget: Option<f64>,
}

#[derive(Deserialize)]
struct CaseStudyFields {
    #[serde(default)]
    profile: BuildingProfile,
    #[serde(default)]
    strategies: StrategyMix,
    #[serde(default)]
    budget: Option<f64>,
}

impl TryFrom<CaseStudyFields> for CaseStudy {
    type Error = EstimationError;

    fn try_from(f: CaseStudyFields) -> Result<Self, Self::Error> {
        Self::new(f.profile, f.strategies).with_budget(f.budget)
    }
}

impl CaseStudy {
    pub fn new(profile: BuildingProfile, strategies: StrategyMix) -> Self {
        Self {
            profile,
            strategies,
            budget: None,
        }
    }

    /// Sets or clears the investment budget. A budget must be finite and >= 0.
    pub fn with_budget(mut self, budget: Option<f64>) -> Result<Self, EstimationError> {
        self.budget = budget
            .map(|b| check_non_negative("budget", b))
            .transpose()?;
        Ok(self)
    }

    pub fn budget(&self) -> Option<f64> {
        self.budget
    }
}
