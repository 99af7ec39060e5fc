//! CLI command implementations

pub mod check;
pub mod explain;
pub mod fix;
pub mod tokens;

use anyhow::{Context, Result};
use plumb_core::NodeDocument;
use plumb_lint::LintConfig;
use plumb_tokens::TokenRegistry;

/// Token registry from `--tokens`, or the built-in scale
pub fn load_registry(path: Option<&str>) -> Result<TokenRegistry> {
    match path {
        Some(path) => TokenRegistry::load_file(path)
            .with_context(|| format!("Failed to load tokens from {}", path)),
        None => Ok(TokenRegistry::global().clone()),
    }
}

/// Lint configuration from `--config`, or the defaults
pub fn load_config(path: Option<&str>) -> Result<LintConfig> {
    match path {
        Some(path) => LintConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path)),
        None => Ok(LintConfig::default()),
    }
}

pub fn load_nodes(path: &str) -> Result<NodeDocument> {
    NodeDocument::load_file(path).with_context(|| format!("Failed to load nodes from {}", path))
}
