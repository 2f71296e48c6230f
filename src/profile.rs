//! Typed inputs of the estimation model.

mod building;
mod case;
mod choice;
mod strategy;

pub use building::{Archetype, BuildingProfile, BuildingType, ClimateScenario, Orientation};
pub use case::CaseStudy;
pub use choice::Choice;
pub use strategy::{Lever, StrategyMix};
