//! Error types for Plumb

use thiserror::Error;

/// The main error type for Plumb operations.
///
/// Lint passes themselves never fail; these errors only come from the
/// loading edges (token files, configuration, node documents).
#[derive(Debug, Error)]
pub enum PlumbError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("Token load error: {0}")]
    TokenLoadError(String),

    #[error("Unknown token category: {0}")]
    UnknownCategory(String),

    #[error("Config load error: {0}")]
    ConfigLoadError(String),

    #[error("Document error: {0}")]
    DocumentError(String),
}

/// Result type alias for Plumb operations
pub type Result<T> = std::result::Result<T, PlumbError>;

impl From<toml::de::Error> for PlumbError {
    fn from(err: toml::de::Error) -> Self {
        PlumbError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for PlumbError {
    fn from(err: toml::ser::Error) -> Self {
        PlumbError::TomlSerError(err.to_string())
    }
}

impl From<serde_json::Error> for PlumbError {
    fn from(err: serde_json::Error) -> Self {
        PlumbError::JsonError(err.to_string())
    }
}
