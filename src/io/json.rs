//! JSON I/O for configurations, case studies and estimates.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{Estimate, EstimationConfig};
use crate::profile::CaseStudy;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {what} file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let value = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize {what} from: {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded {what}");

    Ok(value)
}

fn write_json<T: Serialize>(path: &Path, value: &T, what: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("Failed to serialize {what} to: {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote {what}");

    Ok(())
}

/// Reads an estimation config from a JSON file.
///
/// Missing fields take their defaults; tables must list every option.
/// The loaded config is validated before it is returned.
///
/// # Arguments
/// * `path` - Path to the config file
///
/// # Example
/// ```no_run
/// use bim4energy::Estimator;
/// use bim4energy::io::read_config;
/// use std::path::Path;
///
/// let config = read_config(Path::new("config.json")).unwrap();
/// let estimator = Estimator::new(config).unwrap();
/// ```
pub fn read_config(path: &Path) -> Result<EstimationConfig> {
    let config: EstimationConfig = read_json(path, "config")?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

/// Writes an estimation config to a JSON file.
///
/// Tables are written as label-keyed maps, so the file can be edited by
/// hand and read back with [`read_config`].
///
/// # Arguments
/// * `path` - Path to the output file
/// * `config` - The config to serialize
///
/// # Example
/// ```no_run
/// use bim4energy::EstimationConfig;
/// use bim4energy::io::write_config;
/// use std::path::Path;
///
/// write_config(Path::new("config.json"), &EstimationConfig::simplified()).unwrap();
/// ```
pub fn write_config(path: &Path, config: &EstimationConfig) -> Result<()> {
    write_json(path, config, "config")
}

/// Reads a case study from a JSON file.
///
/// Strategy percentages and the budget are validated while deserializing;
/// omitted sections take their defaults.
///
/// # Arguments
/// * `path` - Path to the case study file
///
/// # Returns
/// The validated case study
///
/// # Example
/// ```no_run
/// use bim4energy::Estimator;
/// use bim4energy::io::read_case;
/// use std::path::Path;
///
/// let case = read_case(Path::new("case.json")).unwrap();
/// let estimate = Estimator::default().evaluate(&case);
/// println!("Improved cost: {}", estimate.cost.improved);
/// ```
pub fn read_case(path: &Path) -> Result<CaseStudy> {
    read_json(path, "case study")
}

/// Writes a case study to a JSON file.
///
/// # Arguments
/// * `path` - Path to the output file
/// * `case` - The case study to serialize
///
/// # Example
/// ```no_run
/// use bim4energy::{BuildingProfile, CaseStudy, StrategyMix};
/// use bim4energy::io::write_case;
/// use std::path::Path;
///
/// let profile = BuildingProfile::from_labels("Office", "Berlin", "Commercial", "East").unwrap();
/// let case = CaseStudy::new(profile, StrategyMix::uniform(50.0).unwrap());
/// write_case(Path::new("case.json"), &case).unwrap();
/// ```
pub fn write_case(path: &Path, case: &CaseStudy) -> Result<()> {
    write_json(path, case, "case study")
}

/// Writes an estimate to a JSON file.
///
/// Scenarios are keyed "Base Case" and "Improved"; the budget check is
/// omitted when the case had no budget.
///
/// # Arguments
/// * `path` - Path to the output file
/// * `estimate` - The estimate to serialize
///
/// # Example
/// ```no_run
/// use bim4energy::{CaseStudy, Estimator};
/// use bim4energy::io::write_estimate;
/// use std::path::Path;
///
/// let estimate = Estimator::default().evaluate(&CaseStudy::default());
/// write_estimate(Path::new("estimate.json"), &estimate).unwrap();
/// ```
pub fn write_estimate(path: &Path, estimate: &Estimate) -> Result<()> {
    write_json(path, estimate, "estimate")
}

/// Serializes any value to a pretty JSON string.
///
/// Useful for printing estimates or advice without touching the file system.
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON string")
}

/// Deserializes a case study from a JSON string.
///
/// Applies the same validation as [`read_case`].
pub fn case_from_str(json: &str) -> Result<CaseStudy> {
    serde_json::from_str(json).context("Failed to deserialize case study from string")
}
