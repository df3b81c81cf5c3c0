/// Convenience result type used across pathmorph.
pub type MorphResult<T> = Result<T, MorphError>;

/// Top-level error taxonomy used by parsing, configuration and planning APIs.
///
/// Morphers themselves never surface these errors to the animation: a failed parse is logged
/// and the interpolator falls back to an endpoint snap.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Malformed path data.
    #[error("parse error at byte {offset}: {message}")]
    Parse {
        /// Byte offset into the path-data string where parsing stopped.
        offset: usize,
        /// Human readable description.
        message: String,
    },

    /// Invalid user-provided options or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Parse`] value.
    pub fn parse(offset: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: message.into(),
        }
    }

    /// Build a [`MorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MorphError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
