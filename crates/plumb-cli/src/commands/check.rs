//! Lint command

use super::{load_config, load_nodes, load_registry};
use anyhow::Result;
use plumb_lint::{LintReport, Linter, Severity};

pub struct CheckArgs {
    pub nodes: String,
    pub tokens: Option<String>,
    pub config: Option<String>,
    pub format: String,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let registry = load_registry(args.tokens.as_deref())?;
    let config = load_config(args.config.as_deref())?;
    let document = load_nodes(&args.nodes)?;

    let report = Linter::new(&registry, &config).lint(&document.nodes);

    match args.format.as_str() {
        "json" => print_report_json(&report)?,
        "text" => print_report_text(&report),
        other => anyhow::bail!("Unknown format: {}", other),
    }

    if !report.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report_text(report: &LintReport) {
    if report.is_empty() {
        println!("All nodes use design tokens.");
        return;
    }

    println!("{}", report.summary());
    println!();

    for violation in &report.violations {
        let severity_str = match violation.severity {
            Some(Severity::Error) => "ERROR",
            Some(Severity::Warning) => "WARN ",
            Some(Severity::Info) => "INFO ",
            None => "     ",
        };

        let hint = match violation.suggestion() {
            Some(s) => format!(" -> {} ({}px)", s.token_name, s.value),
            None => String::new(),
        };

        println!(
            "  [{}] {} ({}): {} = {}{}",
            severity_str,
            violation.node_name,
            violation.node_id,
            violation.title,
            violation.value,
            hint
        );
    }
}

fn print_report_json(report: &LintReport) -> Result<()> {
    let output = serde_json::json!({
        "valid": report.is_valid(),
        "summary": report.summary(),
        "errors": report.count_severity(Severity::Error),
        "warnings": report.count_severity(Severity::Warning),
        "info": report.count_severity(Severity::Info),
        "violations": report.violations,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
