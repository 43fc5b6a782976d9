/// Crate-wide result alias.
pub type TermreelResult<T> = Result<T, TermreelError>;

/// Top-level error type for configuration and evaluation.
#[derive(thiserror::Error, Debug)]
pub enum TermreelError {
    /// Invalid configuration, timeline or composition input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while evaluating a frame (e.g. frame outside the composition).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TermreelError {
    /// Build a [`TermreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TermreelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`TermreelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
