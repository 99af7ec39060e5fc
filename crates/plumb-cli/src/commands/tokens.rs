//! Token scale listing command

use super::load_registry;
use anyhow::Result;
use plumb_tokens::TokenCategory;

pub fn run(tokens: Option<&str>, category: Option<&str>) -> Result<()> {
    let registry = load_registry(tokens)?;

    let categories = match category {
        Some(name) => vec![name.parse::<TokenCategory>()?],
        None => TokenCategory::ALL.to_vec(),
    };

    println!("{} tokens", registry.system());

    for category in categories {
        let scale = registry.scale(category);
        println!();
        println!("{} ({}, {} tokens)", category.label(), category, scale.len());

        if scale.is_empty() {
            println!("  (no tokens)");
            continue;
        }

        for token in scale.tokens() {
            let marker = if token.circular { "  [circular]" } else { "" };
            println!("  {:<24} {:>6}{}", token.name, token.value, marker);
        }
    }

    Ok(())
}
