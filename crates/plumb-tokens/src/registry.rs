//! Token registry holding one scale per category

use crate::category::TokenCategory;
use crate::fluent;
use crate::scale::{Token, TokenScale};
use plumb_core::{PlumbError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// TOML file format for a token set
///
/// ```toml
/// system = "Acme"
///
/// [[spacing]]
/// key = "s"
/// name = "spacingS"
/// value = 8
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TokenFile {
    /// Design system name used in violation titles
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub border_radius: Vec<Token>,
    #[serde(default)]
    pub spacing: Vec<Token>,
    #[serde(default)]
    pub stroke_width: Vec<Token>,
}

/// Registry of the canonical token scales.
///
/// Read-only once built. Checkers and the matcher receive it by reference,
/// so retargeting to another design system means building a different
/// registry, not touching the rules.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRegistry {
    system: String,
    border_radius: TokenScale,
    spacing: TokenScale,
    stroke_width: TokenScale,
}

static GLOBAL: OnceLock<TokenRegistry> = OnceLock::new();

const DEFAULT_SYSTEM: &str = "Custom";

impl TokenRegistry {
    /// The built-in Fluent UI scale (Teams dark theme)
    pub fn fluent_teams() -> Self {
        Self {
            system: "Fluent".to_string(),
            border_radius: TokenScale::builtin(
                TokenCategory::BorderRadius,
                fluent::border_radius(),
            ),
            spacing: TokenScale::builtin(TokenCategory::Spacing, fluent::spacing()),
            stroke_width: TokenScale::builtin(
                TokenCategory::StrokeWidth,
                fluent::stroke_width(),
            ),
        }
    }

    /// Process-wide registry with the built-in scale, initialised on first use
    pub fn global() -> &'static TokenRegistry {
        GLOBAL.get_or_init(Self::fluent_teams)
    }

    /// Build a registry from explicit scales
    pub fn from_scales(
        system: impl Into<String>,
        border_radius: TokenScale,
        spacing: TokenScale,
        stroke_width: TokenScale,
    ) -> Result<Self> {
        for (scale, expected) in [
            (&border_radius, TokenCategory::BorderRadius),
            (&spacing, TokenCategory::Spacing),
            (&stroke_width, TokenCategory::StrokeWidth),
        ] {
            if scale.category() != expected {
                return Err(PlumbError::TokenLoadError(format!(
                    "expected a {} scale, got {}",
                    expected,
                    scale.category()
                )));
            }
        }

        Ok(Self {
            system: system.into(),
            border_radius,
            spacing,
            stroke_width,
        })
    }

    /// Load a registry from a TOML token file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let registry = Self::load_string(&content)?;
        debug!(path = %path.display(), "loaded token file");
        Ok(registry)
    }

    /// Load a registry from a TOML string
    pub fn load_string(content: &str) -> Result<Self> {
        let file: TokenFile = toml::from_str(content).map_err(|e| {
            PlumbError::TokenLoadError(format!("Failed to parse token TOML: {}", e))
        })?;

        Self::from_scales(
            file.system.unwrap_or_else(|| DEFAULT_SYSTEM.to_string()),
            TokenScale::new(TokenCategory::BorderRadius, file.border_radius)?,
            TokenScale::new(TokenCategory::Spacing, file.spacing)?,
            TokenScale::new(TokenCategory::StrokeWidth, file.stroke_width)?,
        )
    }

    /// Name of the design system these scales belong to
    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn scale(&self, category: TokenCategory) -> &TokenScale {
        match category {
            TokenCategory::BorderRadius => &self.border_radius,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::StrokeWidth => &self.stroke_width,
        }
    }

    /// Valid values for a category in declaration order
    pub fn valid_values(&self, category: TokenCategory) -> Vec<u32> {
        self.scale(category).values()
    }

    pub fn contains(&self, category: TokenCategory, value: f64) -> bool {
        self.scale(category).contains(value)
    }

    /// Token name for an exact scale member, `None` otherwise
    pub fn token_name(&self, category: TokenCategory, value: f64) -> Option<&str> {
        self.scale(category).name_for(value)
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::fluent_teams()
    }
}
