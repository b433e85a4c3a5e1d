//! Error types and error handling
//!
//! Rendering never fails: malformed descriptors degrade to empty fragments.
//! Errors only surface at the edge, when a form definition document cannot
//! be read. Configuration loading reports through `anyhow`.

use thiserror::Error;

/// Crate error type
#[derive(Debug, Error)]
pub enum FormError {
    /// A JSON form definition could not be parsed
    #[error("Invalid JSON form definition: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML form definition could not be parsed
    #[error("Invalid TOML form definition: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document parsed but does not have the shape of a form definition
    #[error("Invalid form definition: {0}")]
    InvalidDefinition(String),
}

impl FormError {
    /// Create an invalid-definition error from a message
    #[must_use]
    pub fn invalid_definition<T: Into<String>>(msg: T) -> Self {
        Self::InvalidDefinition(msg.into())
    }
}
