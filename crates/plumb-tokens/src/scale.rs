//! Token and token-scale definitions

use crate::category::TokenCategory;
use plumb_core::{PlumbError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, canonical value in a design system's scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Short scale key (`medium`, `xxs`)
    pub key: String,
    /// Token name shown to designers (`borderRadiusMedium`)
    pub name: String,
    pub value: u32,
    /// Marks the "fully rounded" sentinel, which is valid but never suggested
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub circular: bool,
}

impl Token {
    pub fn new(key: impl Into<String>, name: impl Into<String>, value: u32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            value,
            circular: false,
        }
    }

    pub fn circular(key: impl Into<String>, name: impl Into<String>, value: u32) -> Self {
        Self {
            circular: true,
            ..Self::new(key, name, value)
        }
    }

    fn matches(&self, value: f64) -> bool {
        f64::from(self.value) == value
    }
}

/// The ordered scale of valid values for one category.
///
/// Declaration order is preserved; it decides ties in nearest-token matching.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenScale {
    category: TokenCategory,
    tokens: Vec<Token>,
}

impl TokenScale {
    /// Build a scale, rejecting duplicate values or names and misplaced
    /// circular sentinels
    pub fn new(category: TokenCategory, tokens: Vec<Token>) -> Result<Self> {
        let mut values = HashSet::new();
        let mut names = HashSet::new();

        for token in &tokens {
            if !values.insert(token.value) {
                return Err(PlumbError::TokenLoadError(format!(
                    "{}: value {} is assigned to more than one token",
                    category, token.value
                )));
            }
            if !names.insert(token.name.as_str()) {
                return Err(PlumbError::TokenLoadError(format!(
                    "{}: token name '{}' is used more than once",
                    category, token.name
                )));
            }
        }

        let circular_count = tokens.iter().filter(|t| t.circular).count();
        if circular_count > 0 && category != TokenCategory::BorderRadius {
            return Err(PlumbError::TokenLoadError(format!(
                "{}: only border_radius may declare a circular token",
                category
            )));
        }
        if circular_count > 1 {
            return Err(PlumbError::TokenLoadError(format!(
                "{}: at most one circular token is allowed, found {}",
                category, circular_count
            )));
        }

        Ok(Self { category, tokens })
    }

    /// Scale from a table already known to hold the invariants
    pub(crate) fn builtin(category: TokenCategory, tokens: Vec<Token>) -> Self {
        Self { category, tokens }
    }

    /// An empty scale: every value is off-scale and nothing can be suggested
    pub fn empty(category: TokenCategory) -> Self {
        Self {
            category,
            tokens: Vec::new(),
        }
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// All valid values in declaration order, the circular sentinel included
    pub fn values(&self) -> Vec<u32> {
        self.tokens.iter().map(|t| t.value).collect()
    }

    /// Whether `value` is an exact member of the scale
    pub fn contains(&self, value: f64) -> bool {
        self.tokens.iter().any(|t| t.matches(value))
    }

    /// Token whose value is exactly `value`
    pub fn token_for(&self, value: f64) -> Option<&Token> {
        self.tokens.iter().find(|t| t.matches(value))
    }

    /// Token name for an exact value; `None` for anything off-scale
    pub fn name_for(&self, value: f64) -> Option<&str> {
        self.token_for(value).map(|t| t.name.as_str())
    }

    pub fn circular_token(&self) -> Option<&Token> {
        self.tokens.iter().find(|t| t.circular)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
