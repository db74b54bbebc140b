//! Error types for model encoding and decoding.

use thiserror::Error;

/// Errors raised while converting a model to or from its JSON form.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ModelError {
    /// The JSON encoder failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The payload was not well-formed JSON, a required field was missing,
    /// a field had the wrong type, or strict decoding met an unknown field.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl ModelError {
    /// Wrap an encoder failure.
    pub(crate) fn encode(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }

    /// Wrap a decoder failure.
    pub(crate) fn decode(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }

    /// Whether this error came from the decode path.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Deserialization(_))
    }
}
