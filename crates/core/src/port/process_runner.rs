// Process Runner Port (ADR-002)
// Abstraction for launching the program under test and collecting its output

use crate::domain::ProcessOutput;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Execution errors
///
/// Raised only when there is no output to judge. A program that ran and
/// printed the wrong thing is not an execution error.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Spawn failed for {program}: {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

/// Process Runner trait
///
/// Implementations:
/// - SubprocessRunner: spawns a real OS process (infra-system)
/// - MockProcessRunner: canned output for unit tests
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with no arguments and wait for it to exit
    ///
    /// # Errors
    /// - ExecutionError::SpawnFailed if the program cannot be started
    /// - ExecutionError::IoError if its output cannot be collected
    async fn run(&self, program: &Path) -> Result<ProcessOutput, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock runner behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Exit 0 after printing the given stdout
        Prints(String),
        /// Exit with a code after printing the given stdout
        PrintsAndExits(String, i32),
        /// Fail to spawn with message
        SpawnFails(String),
    }

    /// Mock Process Runner for testing
    pub struct MockProcessRunner {
        behavior: Arc<Mutex<MockBehavior>>,
        call_count: Arc<Mutex<usize>>,
    }

    impl MockProcessRunner {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                call_count: Arc::new(Mutex::new(0)),
            }
        }

        pub fn new_printing(stdout: impl Into<String>) -> Self {
            Self::new(MockBehavior::Prints(stdout.into()))
        }

        pub fn new_spawn_failure(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::SpawnFails(message.into()))
        }

        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl ProcessRunner for MockProcessRunner {
        async fn run(&self, program: &Path) -> Result<ProcessOutput, ExecutionError> {
            *self.call_count.lock().unwrap() += 1;

            let behavior = self.behavior.lock().unwrap().clone();

            let (stdout, exit_code) = match behavior {
                MockBehavior::Prints(stdout) => (stdout, 0),
                MockBehavior::PrintsAndExits(stdout, code) => (stdout, code),
                MockBehavior::SpawnFails(reason) => {
                    return Err(ExecutionError::SpawnFailed {
                        program: program.display().to_string(),
                        reason,
                    })
                }
            };

            Ok(ProcessOutput {
                stdout,
                stderr: String::new(),
                exit_code: Some(exit_code),
                duration_ms: 1,
            })
        }
    }
}
