//! Running without the TUI.

use crate::args::Args;
use log::{info, warn};
use rlifesim_lib::{PatternCatalog, RulePreset, RuleSet, Simulator};
use std::error::Error;

/// Sets up a simulator as the arguments ask.
fn simulator(args: &Args) -> Result<Simulator, Box<dyn Error>> {
    if let Err(e) = args.config.rule_string.parse::<RuleSet>() {
        warn!("{}; falling back to {}", e, RuleSet::parse(&args.config.rule_string));
    }
    let mut sim = args.config.simulator()?;
    if let Some(name) = &args.pattern {
        let (x, y) = args.at;
        sim.add_pattern(name, x, y)?;
        info!("Placed {} at ({}, {})", name, x, y);
    }
    sim.run(args.generations);
    Ok(sim)
}

/// Lists the catalog, by category.
fn list_patterns(catalog: &PatternCatalog) {
    for category in catalog.categories() {
        println!("{}:", category.name());
        for pattern in category.patterns().iter().filter_map(|name| catalog.get(name)) {
            println!(
                "    {:<28} {:>4} cells, {}x{}",
                pattern.name(),
                pattern.len(),
                pattern.width(),
                pattern.height()
            );
        }
    }
}

fn list_presets() {
    for preset in RulePreset::ALL {
        println!("{:<16} {}", preset.to_string(), preset.rule_string());
    }
}

pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.list {
        list_patterns(PatternCatalog::builtin());
        return Ok(());
    }
    if args.presets {
        list_presets();
        return Ok(());
    }

    let sim = simulator(&args)?;

    #[cfg(feature = "tui")]
    {
        if !args.no_tui {
            let sim = crate::tui::run_with_tui(sim, args.speed)?;
            print!("{}", sim.display());
            return Ok(());
        }
    }

    print!("{}", sim.display());
    Ok(())
}
