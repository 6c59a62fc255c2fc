/// Convenience result type used across popscene.
pub type PopsceneResult<T> = Result<T, PopsceneError>;

/// Top-level error taxonomy used by the data pipeline and session APIs.
#[derive(thiserror::Error, Debug)]
pub enum PopsceneError {
    /// Invalid user-provided configuration or row data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The source table could not be opened, read, or does not have the expected shape.
    #[error("load error: {0}")]
    Load(String),

    /// Errors when serializing or deserializing payloads and configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PopsceneError {
    /// Build a [`PopsceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PopsceneError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`PopsceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
