//! Violation categories, properties and severities

use plumb_core::Corner;
use plumb_tokens::TokenCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level for a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// The category a violation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    Radius,
    Spacing,
    Stroke,
    Fill,
    Text,
    Effect,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 6] = [
        ViolationKind::Radius,
        ViolationKind::Spacing,
        ViolationKind::Stroke,
        ViolationKind::Fill,
        ViolationKind::Text,
        ViolationKind::Effect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Radius => "radius",
            ViolationKind::Spacing => "spacing",
            ViolationKind::Stroke => "stroke",
            ViolationKind::Fill => "fill",
            ViolationKind::Text => "text",
            ViolationKind::Effect => "effect",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The exact node property a violation was raised on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LintProperty {
    /// The radius shared by all corners
    CornerRadius,
    /// One corner of a per-corner radius
    Corner(Corner),
    PaddingHorizontal,
    PaddingVertical,
    ItemSpacing,
    StrokeWeight,
    StrokeStyle,
    FillStyle,
    TextStyle,
    EffectStyle,
}

impl LintProperty {
    /// Scale the property's value is checked against; style properties have none
    pub fn token_category(&self) -> Option<TokenCategory> {
        match self {
            LintProperty::CornerRadius | LintProperty::Corner(_) => {
                Some(TokenCategory::BorderRadius)
            }
            LintProperty::PaddingHorizontal
            | LintProperty::PaddingVertical
            | LintProperty::ItemSpacing => Some(TokenCategory::Spacing),
            LintProperty::StrokeWeight => Some(TokenCategory::StrokeWidth),
            LintProperty::StrokeStyle
            | LintProperty::FillStyle
            | LintProperty::TextStyle
            | LintProperty::EffectStyle => None,
        }
    }
}
