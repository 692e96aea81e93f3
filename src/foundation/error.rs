use crate::markup::MarkupError;

/// Convenience result type used across termsvg.
pub type TermsvgResult<T> = Result<T, TermsvgError>;

/// Top-level error taxonomy used by the timeline, renderer and loaders.
#[derive(thiserror::Error, Debug)]
pub enum TermsvgError {
    /// Invalid user-provided script or geometry data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed `[[tag]]` markup.
    #[error("markup error: {0}")]
    Markup(#[from] MarkupError),

    /// Unknown ASCII box style identifier.
    #[error("unknown box style '{0}' (expected 'double' or 'rounded')")]
    BoxStyle(String),

    /// Errors while locating or reading a script/configuration file.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TermsvgError {
    /// Build a [`TermsvgError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TermsvgError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TermsvgError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
