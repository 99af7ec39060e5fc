//! Fix command

use super::{load_config, load_nodes, load_registry};
use anyhow::{Context, Result};
use plumb_lint::{FixReport, Fixer};

pub struct FixArgs {
    pub nodes: String,
    pub tokens: Option<String>,
    pub config: Option<String>,
    pub dry_run: bool,
    pub write: bool,
}

pub fn run(args: FixArgs) -> Result<()> {
    let registry = load_registry(args.tokens.as_deref())?;
    let config = load_config(args.config.as_deref())?;
    let mut document = load_nodes(&args.nodes)?;

    let fixer = Fixer::new(&registry, &config);

    if args.dry_run {
        let report = fixer.dry_run(&document.nodes);
        println!("Dry run results ({} iteration(s)):", report.iterations);
        print_report(&report, "would be");
        return Ok(());
    }

    let report = fixer.fix(&mut document.nodes);
    println!("Fix results ({} iteration(s)):", report.iterations);
    print_report(&report, "are");

    if args.write && !report.actions.is_empty() {
        document
            .save_file(&args.nodes)
            .with_context(|| format!("Failed to write {}", args.nodes))?;
        println!("\nNodes saved to {}", args.nodes);
    }

    Ok(())
}

fn print_report(report: &FixReport, verb: &str) {
    if report.actions.is_empty() {
        println!("  No suggestions {} applied.", verb);
    }

    for action in &report.actions {
        println!(
            "  {} ({}): {}",
            action.node_name, action.node_id, action.description
        );
    }

    if report.remaining_violations > 0 {
        println!(
            "\n  {} violation(s) remain after fixes.",
            report.remaining_violations
        );
    }

    if report.stalled {
        println!("  Warning: some suggestions could not be applied.");
    }
}
