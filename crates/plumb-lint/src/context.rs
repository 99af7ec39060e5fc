//! Explanation contexts built from violations

use crate::report::{ObservedValue, Suggestion, Violation};
use crate::types::{LintProperty, ViolationKind};
use plumb_core::NodeKind;
use plumb_tokens::{Token, TokenCategory, TokenRegistry};
use serde::Serialize;

/// Snapshot of the scale relevant to a violation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSnapshot {
    pub category: String,
    pub valid_values: Vec<u32>,
    pub tokens: Vec<Token>,
}

impl TokenSnapshot {
    fn of(registry: &TokenRegistry, category: TokenCategory) -> Self {
        let scale = registry.scale(category);
        Self {
            category: category.label().to_string(),
            valid_values: scale.values(),
            tokens: scale.tokens().to_vec(),
        }
    }
}

/// Everything an explanation is generated from.
///
/// The explanation template reads nothing else, so the text is fully
/// reproducible from the violation and the registry it was linted with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationContext {
    pub kind: ViolationKind,
    pub message: String,
    pub value: ObservedValue,
    pub node_name: String,
    pub node_kind: NodeKind,
    pub system: String,
    pub suggestion: Option<Suggestion>,
    pub tokens: Option<TokenSnapshot>,
}

impl ExplanationContext {
    pub fn from_violation(violation: &Violation, registry: &TokenRegistry) -> Self {
        let category = match violation.kind {
            ViolationKind::Radius => Some(TokenCategory::BorderRadius),
            ViolationKind::Spacing => Some(TokenCategory::Spacing),
            ViolationKind::Stroke => match violation.property {
                LintProperty::StrokeWeight => Some(TokenCategory::StrokeWidth),
                _ => None,
            },
            ViolationKind::Fill | ViolationKind::Text | ViolationKind::Effect => None,
        };

        Self {
            kind: violation.kind,
            message: violation.title.clone(),
            value: violation.value.clone(),
            node_name: violation.node_name.clone(),
            node_kind: violation.node_kind,
            system: registry.system().to_string(),
            suggestion: violation.suggestion().cloned(),
            tokens: category.map(|c| TokenSnapshot::of(registry, c)),
        }
    }
}
