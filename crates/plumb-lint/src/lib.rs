//! Plumb Lint - Design-token compliance checks
//!
//! This crate checks design nodes against a token registry, reports
//! off-scale properties with the closest token as a suggestion, builds
//! explanation contexts for the presentation layer, and applies
//! suggestions back onto node records.

pub mod checks;
mod config;
mod context;
mod explain;
mod fixer;
mod linter;
mod report;
mod types;

pub use config::{LintConfig, Rule, RuleToggles, SeverityOverrides};
pub use context::{ExplanationContext, TokenSnapshot};
pub use explain::{documentation_link, explain};
pub use fixer::{apply_suggestion, FixAction, FixReport, Fixer};
pub use linter::Linter;
pub use report::{LintReport, ObservedValue, Suggestion, Violation};
pub use types::{LintProperty, Severity, ViolationKind};
