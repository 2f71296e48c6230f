pub mod io;
pub mod model;
pub mod profile;
pub mod report;

// Prelude
pub use model::{
    BaselineSource, CostModel, EnergyBreakdown, Estimate, EstimationConfig, EstimationError,
    Estimator, ReferenceTables,
};
pub use profile::{
    Archetype, BuildingProfile, BuildingType, CaseStudy, Choice, ClimateScenario, Lever,
    Orientation, StrategyMix,
};
