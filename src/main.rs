use std::path::PathBuf;

use anyhow::{Context, Result};
use bim4energy::io::{read_case, read_config, to_json_string, write_config};
use bim4energy::report::{render_advice, render_estimate};
use bim4energy::{
    Archetype, BuildingType, CaseStudy, ClimateScenario, EstimationConfig, Estimator, Lever,
    Orientation, StrategyMix,
};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Energy and investment cost estimates for a building case study.
#[derive(Parser, Debug)]
#[command(name = "bim4energy", version, about)]
struct Cli {
    /// Case study JSON file; flags below override its values
    #[arg(long)]
    case: Option<PathBuf>,

    /// Estimation config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use one fixed baseline for every building type
    #[arg(long)]
    simplified: bool,

    #[arg(long)]
    building_type: Option<BuildingType>,
    #[arg(long)]
    climate: Option<ClimateScenario>,
    #[arg(long)]
    archetype: Option<Archetype>,
    #[arg(long)]
    orientation: Option<Orientation>,

    /// Thermal envelope improvement (%)
    #[arg(long)]
    thermal_envelope: Option<f64>,
    /// Heating system efficiency (%)
    #[arg(long)]
    heating_system: Option<f64>,
    /// Ventilation system efficiency (%)
    #[arg(long)]
    ventilation_system: Option<f64>,
    /// Renewable energy supply (%)
    #[arg(long)]
    renewable_energy: Option<f64>,
    /// Improved building operation (%)
    #[arg(long)]
    building_operation: Option<f64>,

    /// Investment budget to check the improved cost against
    #[arg(long)]
    budget: Option<f64>,

    /// Rank the strategy levers
    #[arg(long)]
    advise: bool,
    /// Percentage points each lever is raised by when advising
    #[arg(long, default_value_t = 10.0)]
    advice_step: f64,

    /// Print JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Write the effective config to this file
    #[arg(long)]
    write_config: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    estimate: &'a bim4energy::Estimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    advice: Option<&'a [bim4energy::model::LeverAdvice]>,
}

fn build_case(cli: &Cli) -> Result<CaseStudy> {
    let mut case = match &cli.case {
        Some(path) => read_case(path)?,
        None => CaseStudy::default(),
    };

    let p = &mut case.profile;
    if let Some(b) = cli.building_type {
        p.building_type = b;
    }
    if let Some(c) = cli.climate {
        p.climate_scenario = c;
    }
    if let Some(a) = cli.archetype {
        p.archetype = a;
    }
    if let Some(o) = cli.orientation {
        p.orientation = o;
    }

    let overrides = [
        (Lever::ThermalEnvelope, cli.thermal_envelope),
        (Lever::HeatingSystem, cli.heating_system),
        (Lever::VentilationSystem, cli.ventilation_system),
        (Lever::RenewableEnergy, cli.renewable_energy),
        (Lever::BuildingOperation, cli.building_operation),
    ];
    let mut mix: StrategyMix = case.strategies;
    for (lever, value) in overrides {
        if let Some(v) = value {
            mix = mix.with(lever, v)?;
        }
    }
    case.strategies = mix;

    if cli.budget.is_some() {
        case = case.with_budget(cli.budget)?;
    }
    Ok(case)
}

fn build_config(cli: &Cli) -> Result<EstimationConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => EstimationConfig::new(),
    };
    if cli.simplified {
        config.baseline_source = bim4energy::BaselineSource::simplified();
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = build_config(&cli)?;
    if let Some(path) = &cli.write_config {
        write_config(path, &config)?;
    }
    let case = build_case(&cli).context("Invalid case study")?;

    let estimator = Estimator::new(config)?;
    let estimate = estimator.evaluate(&case);
    let advice = if cli.advise {
        Some(estimator.advise(&case, cli.advice_step)?)
    } else {
        None
    };

    if cli.json {
        let out = JsonOutput {
            estimate: &estimate,
            advice: advice.as_deref(),
        };
        println!("{}", to_json_string(&out)?);
    } else {
        print!("{}", render_estimate(&estimate));
        if let Some(advice) = &advice {
            println!();
            print!("{}", render_advice(advice));
        }
    }
    Ok(())
}
