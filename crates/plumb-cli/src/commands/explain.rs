//! Explain command

use super::{load_config, load_nodes, load_registry};
use anyhow::Result;
use plumb_lint::{documentation_link, explain, ExplanationContext, Linter};

pub struct ExplainArgs {
    pub nodes: String,
    pub tokens: Option<String>,
    pub config: Option<String>,
    pub format: String,
}

pub fn run(args: ExplainArgs) -> Result<()> {
    let registry = load_registry(args.tokens.as_deref())?;
    let config = load_config(args.config.as_deref())?;
    let document = load_nodes(&args.nodes)?;

    let report = Linter::new(&registry, &config).lint(&document.nodes);
    let contexts: Vec<ExplanationContext> = report
        .violations
        .iter()
        .map(|v| ExplanationContext::from_violation(v, &registry))
        .collect();

    match args.format.as_str() {
        "json" => {
            let entries: Vec<serde_json::Value> = contexts
                .iter()
                .map(|ctx| {
                    serde_json::json!({
                        "context": ctx,
                        "explanation": explain(ctx),
                        "documentation": documentation_link(ctx.kind),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        "text" => {
            if contexts.is_empty() {
                println!("Nothing to explain.");
            }
            for ctx in &contexts {
                println!("{} ({}): {}", ctx.node_name, ctx.node_kind, ctx.message);
                println!("  {}", explain(ctx));
                println!("  See {}", documentation_link(ctx.kind));
                println!();
            }
        }
        other => anyhow::bail!("Unknown format: {}", other),
    }

    Ok(())
}
