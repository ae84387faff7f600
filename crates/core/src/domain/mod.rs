// Domain Layer - Pure check logic and value types

pub mod check;
pub mod error;

// Re-exports
pub use check::{CheckReport, Expectation, ProcessOutput, RunId, TestOutcome};
pub use error::DomainError;
