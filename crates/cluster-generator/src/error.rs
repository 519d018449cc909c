//! Error types for cluster generation

use planetary::ThemeError;
use stellar::{FrequencyError, ParseCategoryError};
use thiserror::Error;

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Errors that abort a generation run
///
/// Degenerate systems are repaired in place and never surface here.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Structural invariant violated: {0}")]
    StructuralInvariantViolation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        GenerationError::InvalidConfiguration(message.into())
    }

    pub fn structural(message: impl Into<String>) -> Self {
        GenerationError::StructuralInvariantViolation(message.into())
    }
}

impl From<FrequencyError> for GenerationError {
    fn from(err: FrequencyError) -> Self {
        GenerationError::InvalidConfiguration(err.to_string())
    }
}

impl From<ThemeError> for GenerationError {
    fn from(err: ThemeError) -> Self {
        GenerationError::InvalidConfiguration(err.to_string())
    }
}

impl From<ParseCategoryError> for GenerationError {
    fn from(err: ParseCategoryError) -> Self {
        GenerationError::InvalidConfiguration(format!("startingSystemType: {}", err))
    }
}
