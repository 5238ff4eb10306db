//! Team Planner Example
//!
//! Restores a team from a share fragment and prints its members, warnings and
//! per-type tallies.
//!
//! ```text
//! cargo run -p dexplan-planner --example plan -- "swsh+charizard-gmax+lapras+mr%20mime"
//! ```
//!
//! `DEXPLAN_DATA_DIR` points at the reference data and `DEXPLAN_LOG` sets the
//! log filter. Pass `--json` to print the tallies as JSON instead.

use std::env;

use anyhow::{Result, bail};
use dexplan_planner::{logging, PlannerConfig, ReferenceData, Session, Side, TeamAnalysis};

fn main() -> Result<()> {
    let config = PlannerConfig::from_env();
    logging::init(&config.log_filter)?;

    let mut json = false;
    let mut fragment = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => fragment = Some(arg),
        }
    }

    let data = ReferenceData::load(&config.data_dir)?;
    let mut session = Session::new(data, String::new());

    let Some(fragment) = fragment else {
        println!("Titles:");
        for (slug, name) in session.titles() {
            println!("  {:<6} {}", slug, name);
        }
        return Ok(());
    };

    if !session.load_fragment(&fragment) {
        bail!("Cannot plan for fragment '{}'", fragment);
    }

    let (Some(team), Some(roster), Some(analysis)) = (
        session.current_team(),
        session.roster(),
        session.current_tallies(),
    ) else {
        bail!("No team loaded");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
        return Ok(());
    }

    println!("{} ({})", roster.title().display_name(), session.sink());
    for (position, slot) in team.slots().iter().enumerate() {
        match slot.member.and_then(|m| roster.get(m.id).map(|e| (m, e))) {
            Some((member, entry)) => {
                let types: Vec<String> = entry.types.iter().map(|t| t.to_string()).collect();
                let form = if member.giant { " [giant]" } else { "" };
                println!("  {}. {}{} - {}", position + 1, entry.item.name, form, types.join("/"));
            }
            None => println!("  {}. -", position + 1),
        }
    }

    print_warnings(analysis);
    print_tallies(analysis);
    Ok(())
}

fn print_warnings(analysis: &TeamAnalysis) {
    let warnings: Vec<String> = analysis
        .warnings()
        .map(|(ty, side)| match side {
            Side::Defense => format!("weak to {}", ty),
            Side::Offense => format!("no answer to {}", ty),
        })
        .collect();

    if warnings.is_empty() {
        println!("\nNo warnings");
    } else {
        println!("\nWarnings: {}", warnings.join(", "));
    }
}

fn print_tallies(analysis: &TeamAnalysis) {
    println!("\n{:<10} {:>7} {:>7}", "Type", "Defense", "Offense");
    for tally in analysis.tallies() {
        println!(
            "{:<10} {:>6}{} {:>6}{}",
            tally.ty,
            tally.defense.count,
            if tally.defense.warning { "!" } else { " " },
            tally.offense.count,
            if tally.offense.warning { "!" } else { " " },
        );
    }
}
