// Smoke Test Use Case
// spawn -> wait -> capture -> assert, one child per invocation

use crate::domain::{Expectation, TestOutcome};
use crate::error::Result;
use crate::port::{IdProvider, ProcessRunner};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Smoke Test Runner
///
/// Holds no per-run state, so repeated checks against an unchanged program
/// produce the same verdict.
pub struct SmokeTestRunner {
    runner: Arc<dyn ProcessRunner>,
    id_provider: Arc<dyn IdProvider>,
}

impl SmokeTestRunner {
    pub fn new(runner: Arc<dyn ProcessRunner>, id_provider: Arc<dyn IdProvider>) -> Self {
        Self {
            runner,
            id_provider,
        }
    }

    /// Run `program` with no arguments and check its stdout for `expected`
    ///
    /// # Errors
    /// - SmokeError::Validation if `program` or `expected` is empty
    /// - SmokeError::Execution if the program cannot be started
    ///
    /// A program that runs but misses the expectation is `Ok(TestOutcome::Fail)`.
    pub async fn run_and_check(
        &self,
        program: impl Into<PathBuf>,
        expected: &str,
    ) -> Result<TestOutcome> {
        let expectation = Expectation::new(program, expected)?;
        self.check(&expectation).await
    }

    /// Same as `run_and_check` for an already validated expectation
    pub async fn check(&self, expectation: &Expectation) -> Result<TestOutcome> {
        let run_id = self.id_provider.generate_id();

        info!(
            run_id = %run_id,
            program = %expectation.program().display(),
            expected = %expectation.expected(),
            "Running smoke check"
        );

        let output = self.runner.run(expectation.program()).await?;

        if !output.exited_successfully() {
            warn!(
                run_id = %run_id,
                exit_code = ?output.exit_code,
                "Program exited unsuccessfully; verdict uses stdout only"
            );
        }

        let outcome = TestOutcome::evaluate(expectation, run_id, output);

        if outcome.is_pass() {
            info!(run_id = %outcome.report().run_id, "Smoke check passed");
        } else {
            warn!(
                run_id = %outcome.report().run_id,
                stdout = %outcome.report().output.stdout,
                "Smoke check failed: expected text not found in stdout"
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::id_provider::SequentialIdProvider;
    use crate::port::process_runner::mocks::{MockBehavior, MockProcessRunner};
    use crate::SmokeError;

    fn runner_with(mock: Arc<MockProcessRunner>) -> SmokeTestRunner {
        SmokeTestRunner::new(mock, Arc::new(SequentialIdProvider::new()))
    }

    #[tokio::test]
    async fn test_greeting_passes() {
        let mock = Arc::new(MockProcessRunner::new_printing("안녕하세요\n"));
        let runner = runner_with(mock.clone());

        let outcome = runner.run_and_check("./hello", "안녕하세요").await.unwrap();

        assert!(outcome.is_pass());
        assert_eq!(outcome.report().output.stdout.trim(), "안녕하세요");
        assert_eq!(outcome.report().run_id, "run-1");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_wrong_greeting_fails_with_stdout() {
        let mock = Arc::new(MockProcessRunner::new_printing("Hello, World!\n"));
        let runner = runner_with(mock);

        let outcome = runner.run_and_check("./hello", "안녕하세요").await.unwrap();

        assert!(!outcome.is_pass());
        let err = outcome.into_assertion().unwrap_err();
        assert!(err.to_string().contains("Hello, World!"));
    }

    #[tokio::test]
    async fn test_spawn_failure_is_execution_error() {
        let mock = Arc::new(MockProcessRunner::new_spawn_failure("No such file"));
        let runner = runner_with(mock);

        let result = runner.run_and_check("./missing", "안녕하세요").await;

        let err = result.unwrap_err();
        assert!(err.is_execution_failure());
        assert!(!err.is_assertion_failure());
    }

    #[tokio::test]
    async fn test_empty_expectation_never_spawns() {
        let mock = Arc::new(MockProcessRunner::new_printing("안녕하세요\n"));
        let runner = runner_with(mock.clone());

        let result = runner.run_and_check("./hello", "").await;

        assert!(matches!(result, Err(SmokeError::Validation(_))));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_nonzero_exit_with_greeting_still_passes() {
        let mock = Arc::new(MockProcessRunner::new(MockBehavior::PrintsAndExits(
            "안녕하세요\n".to_string(),
            3,
        )));
        let runner = runner_with(mock);

        let outcome = runner.run_and_check("./hello", "안녕하세요").await.unwrap();

        assert!(outcome.is_pass());
        assert_eq!(outcome.report().output.exit_code, Some(3));
    }

    #[tokio::test]
    async fn test_repeated_runs_agree() {
        let mock = Arc::new(MockProcessRunner::new_printing("Starting...\n안녕하세요\nDone.\n"));
        let runner = runner_with(mock.clone());

        let first = runner.run_and_check("./hello", "안녕하세요").await.unwrap();
        let second = runner.run_and_check("./hello", "안녕하세요").await.unwrap();

        assert_eq!(first.is_pass(), second.is_pass());
        assert_eq!(first.report().output, second.report().output);
        assert_ne!(first.report().run_id, second.report().run_id);
        assert_eq!(mock.call_count(), 2);
    }
}
