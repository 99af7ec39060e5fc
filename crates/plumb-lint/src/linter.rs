//! Lint pass over a set of nodes

use crate::checks::run_rule;
use crate::config::{LintConfig, Rule};
use crate::report::{LintReport, Violation};
use plumb_core::NodeRecord;
use plumb_tokens::TokenRegistry;
use tracing::info;

/// Runs the enabled checks against nodes.
///
/// Holds no state between passes: linting the same nodes twice yields the
/// same ordered report.
pub struct Linter<'a> {
    registry: &'a TokenRegistry,
    config: &'a LintConfig,
}

impl<'a> Linter<'a> {
    /// Create a new linter
    pub fn new(registry: &'a TokenRegistry, config: &'a LintConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'a TokenRegistry {
        self.registry
    }

    /// Lint every node in order and return the report
    pub fn lint(&self, nodes: &[NodeRecord]) -> LintReport {
        let mut report = LintReport::new();

        for node in nodes {
            self.lint_node_into(node, &mut report.violations);
        }

        info!(
            nodes = nodes.len(),
            violations = report.violations.len(),
            "lint pass complete"
        );
        report
    }

    /// Lint a single node
    pub fn lint_node(&self, node: &NodeRecord) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.lint_node_into(node, &mut violations);
        violations
    }

    fn lint_node_into(&self, node: &NodeRecord, violations: &mut Vec<Violation>) {
        let start = violations.len();

        for rule in Rule::ALL {
            if self.config.rules.is_enabled(rule) {
                run_rule(rule, node, self.registry, violations);
            }
        }

        for violation in &mut violations[start..] {
            violation.severity = self.config.severity.for_kind(violation.kind);
        }
    }
}
