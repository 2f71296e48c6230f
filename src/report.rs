//! Plain-text rendering of estimates.

use std::fmt::Write;

use crate::model::{EndUse, Estimate, LeverAdvice, Scenario};

/// Renders an estimate as a text report.
///
/// Sections: energy consumption per end use and scenario, annual totals,
/// investment cost, optional budget check and the carbon saving figure.
pub fn render_estimate(estimate: &Estimate) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_estimate(&mut out, estimate);
    out
}

fn write_estimate(out: &mut String, e: &Estimate) -> std::fmt::Result {
    writeln!(out, "Case study: {}", e.profile)?;
    writeln!(out)?;

    writeln!(out, "Energy consumption (kWh/m²/y)")?;
    write!(out, "{:<10}", "")?;
    for end_use in EndUse::ALL {
        write!(out, "{:>10}", end_use.label())?;
    }
    writeln!(out, "{:>10}", "Total")?;
    for (scenario, energy) in e.energy.iter() {
        write!(out, "{:<10}", scenario.label())?;
        for (_, value) in energy.iter() {
            write!(out, "{value:>10.1}")?;
        }
        writeln!(out, "{:>10.1}", e.total_consumption.get(scenario))?;
    }
    writeln!(
        out,
        "Annual saving: {:.1} kWh/m²/y",
        e.total_consumption.saving()
    )?;
    writeln!(out)?;

    writeln!(out, "Investment cost")?;
    for scenario in Scenario::ALL {
        writeln!(out, "{:<10}{:>10.1}", scenario.label(), e.cost.get(scenario))?;
    }
    if let Some(check) = e.budget {
        let verdict = if check.within_budget {
            "within budget"
        } else {
            "over budget"
        };
        writeln!(
            out,
            "Budget {:.1}: {verdict} (headroom {:.1})",
            check.budget, check.headroom
        )?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Estimated carbon emission savings: {} kg CO2/m²/y",
        e.carbon_savings_kg_co2_per_m2
    )
}

/// Renders lever advice, best lever first.
pub fn render_advice(advice: &[LeverAdvice]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Strategy advice");
    for (rank, a) in advice.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({:.0}% -> {:.0}%): saves {:.1} kWh/m²/y, cost {:+.1}",
            rank + 1,
            a.lever.caption(),
            a.from_percent,
            a.to_percent,
            a.energy_saving,
            a.cost_change
        );
    }
    out
}
