//! Violation and lint report types

use crate::types::{LintProperty, Severity, ViolationKind};
use plumb_core::{NodeId, NodeKind};
use plumb_tokens::TokenMatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value found on the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservedValue {
    Number(f64),
    Label(String),
    Missing,
}

impl ObservedValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ObservedValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for ObservedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservedValue::Number(v) => write!(f, "{}", v),
            ObservedValue::Label(label) => f.write_str(label),
            ObservedValue::Missing => f.write_str("-"),
        }
    }
}

/// A replacement token proposed for a violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub token_name: String,
    pub value: u32,
    pub distance: f64,
    pub reason: String,
}

impl Suggestion {
    pub fn from_match(m: TokenMatch, reason: impl Into<String>) -> Self {
        Self {
            token_name: m.token_name,
            value: m.value,
            distance: m.distance,
            reason: reason.into(),
        }
    }
}

/// A single off-scale or unstyled property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub node_id: NodeId,
    pub node_name: String,
    pub node_kind: NodeKind,
    pub kind: ViolationKind,
    pub property: LintProperty,
    pub title: String,
    pub value: ObservedValue,
    pub severity: Option<Severity>,
    /// Zero or one suggestion with the current rule set
    pub suggestions: Vec<Suggestion>,
}

impl Violation {
    pub fn suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

/// The ordered outcome of one lint pass
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct LintReport {
    pub violations: Vec<Violation>,
}

impl LintReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the design passes (no errors)
    pub fn is_valid(&self) -> bool {
        !self
            .violations
            .iter()
            .any(|v| v.severity == Some(Severity::Error))
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn count_kind(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    pub fn count_severity(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Some(severity))
            .count()
    }

    /// Number of violations that carry a suggested token
    pub fn fixable_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.suggestion().is_some())
            .count()
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        let total = self.violations.len();
        if total == 0 {
            return "No violations found.".to_string();
        }

        let by_kind: Vec<String> = ViolationKind::ALL
            .iter()
            .filter_map(|kind| match self.count_kind(*kind) {
                0 => None,
                n => Some(format!("{} {}", n, kind)),
            })
            .collect();

        format!(
            "{} violation(s) ({}), {} with suggestions",
            total,
            by_kind.join(", "),
            self.fixable_count(),
        )
    }
}
