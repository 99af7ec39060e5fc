//! Applying suggested tokens back onto node records

use crate::config::LintConfig;
use crate::linter::Linter;
use crate::report::Violation;
use crate::types::LintProperty;
use plumb_core::{AutoLayout, CornerRadius, NodeId, NodeRecord, StrokeWeight};
use plumb_tokens::TokenRegistry;
use tracing::{debug, warn};

const MAX_ITERATIONS: usize = 10;

/// A single suggestion that was or would be applied
#[derive(Debug, Clone, PartialEq)]
pub struct FixAction {
    pub node_id: NodeId,
    pub node_name: String,
    pub property: LintProperty,
    pub from: f64,
    pub to: u32,
    pub token_name: String,
    pub description: String,
}

/// Report of a fix run
#[derive(Debug, Clone, PartialEq)]
pub struct FixReport {
    pub actions: Vec<FixAction>,
    pub remaining_violations: usize,
    /// The last pass found suggestions but none could be applied
    pub stalled: bool,
    pub iterations: usize,
}

/// Write a violation's suggested value into the violated property.
///
/// Returns `None` when the violation has no suggestion, targets another
/// node, or names a property that has no numeric value to replace.
pub fn apply_suggestion(node: &mut NodeRecord, violation: &Violation) -> Option<FixAction> {
    if node.id != violation.node_id {
        return None;
    }
    let suggestion = violation.suggestion()?;
    let from = violation.value.as_number()?;
    let to = f64::from(suggestion.value);

    match violation.property {
        LintProperty::CornerRadius => node.corner_radius = Some(CornerRadius::Uniform(to)),
        LintProperty::Corner(corner) => {
            let radius = node.corner_radius?;
            node.corner_radius = Some(radius.with_corner(corner, to));
        }
        LintProperty::PaddingHorizontal => layout_mut(node)?.padding_left = Some(to),
        LintProperty::PaddingVertical => layout_mut(node)?.padding_top = Some(to),
        LintProperty::ItemSpacing => layout_mut(node)?.item_spacing = Some(to),
        LintProperty::StrokeWeight => node.stroke_weight = Some(StrokeWeight::Uniform(to)),
        LintProperty::StrokeStyle
        | LintProperty::FillStyle
        | LintProperty::TextStyle
        | LintProperty::EffectStyle => return None,
    }

    debug!(node = %node.id, from, to, token = %suggestion.token_name, "applied suggestion");

    Some(FixAction {
        node_id: node.id.clone(),
        node_name: node.name.clone(),
        property: violation.property,
        from,
        to: suggestion.value,
        token_name: suggestion.token_name.clone(),
        description: format!(
            "{}: {} -> {} ({})",
            violation.title, from, suggestion.value, suggestion.token_name
        ),
    })
}

fn layout_mut(node: &mut NodeRecord) -> Option<&mut AutoLayout> {
    if node.kind.is_container() {
        node.layout.as_mut()
    } else {
        None
    }
}

/// Applies suggestions until the nodes lint clean or no more progress is made
pub struct Fixer<'a> {
    linter: Linter<'a>,
}

impl<'a> Fixer<'a> {
    /// Create a new fixer
    pub fn new(registry: &'a TokenRegistry, config: &'a LintConfig) -> Self {
        Self {
            linter: Linter::new(registry, config),
        }
    }

    /// Apply fixes in place, iterating until stable or max iterations.
    ///
    /// Several passes may be needed: a node with differing corners reports
    /// one corner per pass.
    pub fn fix(&self, nodes: &mut [NodeRecord]) -> FixReport {
        let mut actions = Vec::new();

        for iteration in 0..MAX_ITERATIONS {
            let mut fixable = 0;
            let mut made_progress = false;

            // Violations stay paired with the node they came from; ids need not be unique.
            for node in nodes.iter_mut() {
                let violations = self.linter.lint_node(node);
                for violation in violations.iter().filter(|v| v.suggestion().is_some()) {
                    fixable += 1;
                    if let Some(action) = apply_suggestion(node, violation) {
                        actions.push(action);
                        made_progress = true;
                    }
                }
            }

            if fixable == 0 {
                return FixReport {
                    actions,
                    remaining_violations: self.linter.lint(nodes).violations.len(),
                    stalled: false,
                    iterations: iteration + 1,
                };
            }

            if !made_progress {
                warn!(iteration, "suggestions could not be applied");
                return FixReport {
                    actions,
                    remaining_violations: self.linter.lint(nodes).violations.len(),
                    stalled: true,
                    iterations: iteration + 1,
                };
            }
        }

        let final_report = self.linter.lint(nodes);
        FixReport {
            actions,
            remaining_violations: final_report.violations.len(),
            stalled: false,
            iterations: MAX_ITERATIONS,
        }
    }

    /// Dry run: clone the nodes, apply fixes, return the report without mutation
    pub fn dry_run(&self, nodes: &[NodeRecord]) -> FixReport {
        let mut cloned = nodes.to_vec();
        self.fix(&mut cloned)
    }
}
