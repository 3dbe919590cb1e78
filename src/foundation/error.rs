/// Convenience result type used across Aperture.
pub type ApertureResult<T> = Result<T, ApertureError>;

/// Top-level error taxonomy.
///
/// Only configuration is fallible. Event handling in the runtime clamps or ignores bad input
/// instead of returning errors.
#[derive(thiserror::Error, Debug)]
pub enum ApertureError {
    /// Invalid user-provided configuration (tables, springs, offsets, scene layout).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building animation primitives (easing curves, transitions).
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApertureError {
    /// Build an [`ApertureError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ApertureError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`ApertureError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ApertureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
