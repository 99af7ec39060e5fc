//! Token categories

use plumb_core::PlumbError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A family of design tokens sharing one numeric scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    BorderRadius,
    Spacing,
    StrokeWidth,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 3] = [
        TokenCategory::BorderRadius,
        TokenCategory::Spacing,
        TokenCategory::StrokeWidth,
    ];

    /// Key used in token files (`[[border_radius]]`)
    pub fn key(&self) -> &'static str {
        match self {
            TokenCategory::BorderRadius => "border_radius",
            TokenCategory::Spacing => "spacing",
            TokenCategory::StrokeWidth => "stroke_width",
        }
    }

    /// Human-readable label used in explanations
    pub fn label(&self) -> &'static str {
        match self {
            TokenCategory::BorderRadius => "Border Radius",
            TokenCategory::Spacing => "Spacing",
            TokenCategory::StrokeWidth => "Stroke Width",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TokenCategory {
    type Err = PlumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "border_radius" | "borderRadius" | "radius" => Ok(TokenCategory::BorderRadius),
            "spacing" => Ok(TokenCategory::Spacing),
            "stroke_width" | "strokeWidth" | "stroke" => Ok(TokenCategory::StrokeWidth),
            other => Err(PlumbError::UnknownCategory(other.to_string())),
        }
    }
}
