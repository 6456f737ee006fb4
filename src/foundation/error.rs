/// Convenience result type used across folio-motion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The engines themselves never fail: a missing node or target is a silent
/// no-op. Errors only surface while loading or validating page configuration
/// and in the command line front-end.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided page configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing page configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
