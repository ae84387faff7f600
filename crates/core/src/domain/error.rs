// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Expected substring must not be empty")]
    EmptyExpectation,

    #[error("Program path must not be empty")]
    EmptyProgram,
}

pub type Result<T> = std::result::Result<T, DomainError>;
