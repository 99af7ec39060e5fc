//! Lint configuration (`plumb.toml`)

use crate::types::{Severity, ViolationKind};
use plumb_core::{PlumbError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single check, in the order the linter runs them on each node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Radius,
    Spacing,
    StrokeWidth,
    FillStyle,
    StrokeStyle,
    TextStyle,
    EffectStyle,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::Radius,
        Rule::Spacing,
        Rule::StrokeWidth,
        Rule::FillStyle,
        Rule::StrokeStyle,
        Rule::TextStyle,
        Rule::EffectStyle,
    ];
}

/// Which rules are enabled; everything is on by default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleToggles {
    pub radius: bool,
    pub spacing: bool,
    pub stroke_width: bool,
    pub fill_style: bool,
    pub stroke_style: bool,
    pub text_style: bool,
    pub effect_style: bool,
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self {
            radius: true,
            spacing: true,
            stroke_width: true,
            fill_style: true,
            stroke_style: true,
            text_style: true,
            effect_style: true,
        }
    }
}

impl RuleToggles {
    pub fn is_enabled(&self, rule: Rule) -> bool {
        match rule {
            Rule::Radius => self.radius,
            Rule::Spacing => self.spacing,
            Rule::StrokeWidth => self.stroke_width,
            Rule::FillStyle => self.fill_style,
            Rule::StrokeStyle => self.stroke_style,
            Rule::TextStyle => self.text_style,
            Rule::EffectStyle => self.effect_style,
        }
    }
}

/// Severity stamped on violations of each kind. Unset kinds keep no severity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityOverrides {
    pub radius: Option<Severity>,
    pub spacing: Option<Severity>,
    pub stroke: Option<Severity>,
    pub fill: Option<Severity>,
    pub text: Option<Severity>,
    pub effect: Option<Severity>,
}

impl SeverityOverrides {
    pub fn for_kind(&self, kind: ViolationKind) -> Option<Severity> {
        match kind {
            ViolationKind::Radius => self.radius,
            ViolationKind::Spacing => self.spacing,
            ViolationKind::Stroke => self.stroke,
            ViolationKind::Fill => self.fill,
            ViolationKind::Text => self.text,
            ViolationKind::Effect => self.effect,
        }
    }
}

/// Lint configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    pub rules: RuleToggles,
    pub severity: SeverityOverrides,
}

impl LintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::load_string(&content)
    }

    /// Load configuration from a TOML string
    pub fn load_string(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            PlumbError::ConfigLoadError(format!("Failed to parse config TOML: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let config = LintConfig::default();
        for rule in Rule::ALL {
            assert!(config.rules.is_enabled(rule));
        }
        for kind in ViolationKind::ALL {
            assert_eq!(config.severity.for_kind(kind), None);
        }
    }

    #[test]
    fn test_load_partial_config() {
        let config = LintConfig::load_string(
            r#"
[rules]
text_style = false

[severity]
radius = "warning"
spacing = "error"
"#,
        )
        .unwrap();

        assert!(!config.rules.is_enabled(Rule::TextStyle));
        assert!(config.rules.is_enabled(Rule::Radius));
        assert_eq!(config.severity.for_kind(ViolationKind::Radius), Some(Severity::Warning));
        assert_eq!(config.severity.for_kind(ViolationKind::Spacing), Some(Severity::Error));
        assert_eq!(config.severity.for_kind(ViolationKind::Stroke), None);
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(LintConfig::load_string("").unwrap(), LintConfig::default());
    }

    #[test]
    fn test_bad_severity_is_an_error() {
        let err = LintConfig::load_string("[severity]\nradius = \"fatal\"\n").unwrap_err();
        assert!(matches!(err, PlumbError::ConfigLoadError(_)));
    }
}
