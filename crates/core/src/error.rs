// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// `Execution` and `Assertion` are the two failure kinds of a smoke check and
/// must never be folded into each other.
#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Validation error: {0}")]
    Validation(#[from] crate::domain::DomainError),

    #[error("Execution error: {0}")]
    Execution(#[from] crate::port::ExecutionError),

    #[error("Assertion failed: expected {expected:?} in stdout, captured stdout was:\n{stdout}")]
    Assertion { expected: String, stdout: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SmokeError {
    /// True for failures where the child never produced output to check
    pub fn is_execution_failure(&self) -> bool {
        matches!(self, SmokeError::Execution(_))
    }

    /// True when the child ran but its stdout missed the expectation
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, SmokeError::Assertion { .. })
    }
}

/// Result type alias using SmokeError
pub type Result<T> = std::result::Result<T, SmokeError>;
