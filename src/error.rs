// Domain error types

use thiserror::Error;

/// Why a theme file was rejected
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Theme file must contain a JSON object")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unexpected theme structure: {0}")]
    InvalidShape(#[source] serde_json::Error),
}

/// Lookup misses in the theme store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    #[error("Theme name must not be blank")]
    BlankName,
}

/// Lookup misses in the token store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token category not found: {0}")]
    CategoryNotFound(String),

    #[error("Token '{name}' not found in category '{category}'")]
    TokenNotFound { category: String, name: String },
}
