//! Parametric energy and investment cost estimation.
//!
//! The model maps a [`CaseStudy`](crate::profile::CaseStudy) to an
//! [`Estimate`] using fixed reference tables: the baseline of the building
//! type is scaled by climate and orientation factors, then damped by the
//! strategy levers.

pub mod config;
pub mod cost;
pub mod energy;
pub mod error;
pub mod estimator;
pub mod result;
pub mod table;

pub use config::{BaselineSource, EstimationConfig, ReferenceTables};
pub use cost::{CostModel, compute_investment_cost};
pub use energy::{EndUse, EnergyBreakdown, compute_improved, compute_total_consumption};
pub use error::EstimationError;
pub use estimator::{Estimator, LeverAdvice};
pub use result::{BudgetCheck, CostResult, EnergyResult, Estimate, Scenario, ScenarioPair};
pub use table::EnumTable;
