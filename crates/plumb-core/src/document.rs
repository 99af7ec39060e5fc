//! Node documents exported from the host tool

use crate::error::{PlumbError, Result};
use crate::node::NodeRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// A flat list of node records in traversal order.
///
/// Stored as JSON (`{ "nodes": [...] }`) or TOML (`[[nodes]]`), chosen by
/// file extension. Node entries that fail to parse are skipped with a
/// warning; only a malformed document shell is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDocument {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
}

#[derive(Deserialize)]
struct RawJsonDocument {
    #[serde(default)]
    nodes: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct RawTomlDocument {
    #[serde(default)]
    nodes: Vec<toml::Value>,
}

fn keep_parsed<E: std::fmt::Display>(
    index: usize,
    parsed: std::result::Result<NodeRecord, E>,
    nodes: &mut Vec<NodeRecord>,
) {
    match parsed {
        Ok(node) => nodes.push(node),
        Err(e) => warn!(index, error = %e, "skipping malformed node"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(PlumbError::DocumentError(format!(
            "Unsupported node document '{}': expected a .json or .toml file",
            path.display()
        ))),
    }
}

impl NodeDocument {
    pub fn new(nodes: Vec<NodeRecord>) -> Self {
        Self { nodes }
    }

    /// Load a document from disk
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = format_for(path)?;
        let content = fs::read_to_string(path)?;
        match format {
            Format::Json => Self::from_json(&content),
            Format::Toml => Self::from_toml(&content),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawJsonDocument = serde_json::from_str(content)?;
        let mut nodes = Vec::with_capacity(raw.nodes.len());
        for (index, value) in raw.nodes.into_iter().enumerate() {
            keep_parsed(index, serde_json::from_value(value), &mut nodes);
        }
        Ok(Self { nodes })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawTomlDocument = toml::from_str(content)?;
        let mut nodes = Vec::with_capacity(raw.nodes.len());
        for (index, value) in raw.nodes.into_iter().enumerate() {
            let parsed: std::result::Result<NodeRecord, toml::de::Error> = value.try_into();
            keep_parsed(index, parsed, &mut nodes);
        }
        Ok(Self { nodes })
    }

    /// Write the document back in the format implied by the extension
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        fs::write(path, content)?;
        Ok(())
    }
}
