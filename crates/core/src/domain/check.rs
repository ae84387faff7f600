// Smoke Check Domain Model

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{DomainError, Result};

/// Run ID (UUID v4), one per check invocation
pub type RunId = String;

/// Program to launch and the text its stdout must contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    program: PathBuf,
    expected: String,
}

impl Expectation {
    pub fn new(program: impl Into<PathBuf>, expected: impl Into<String>) -> Result<Self> {
        let program = program.into();
        let expected = expected.into();

        if program.as_os_str().is_empty() {
            return Err(DomainError::EmptyProgram);
        }
        if expected.is_empty() {
            return Err(DomainError::EmptyExpectation);
        }

        Ok(Self { program, expected })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Plain substring containment. No trimming, no exact match.
    pub fn is_met_by(&self, stdout: &str) -> bool {
        stdout.contains(&self.expected)
    }
}

/// Captured result of one child process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// None when the child was terminated by a signal
    pub exit_code: Option<i32>,
    pub duration_ms: i64,
}

impl ProcessOutput {
    pub fn exited_successfully(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Everything known about one check, regardless of its verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub run_id: RunId,
    pub program: String,
    pub expected: String,
    pub output: ProcessOutput,
}

/// Verdict of a smoke check that got as far as running the program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestOutcome {
    Pass(CheckReport),
    Fail(CheckReport),
}

impl TestOutcome {
    /// Judge captured output against the expectation
    pub fn evaluate(expectation: &Expectation, run_id: RunId, output: ProcessOutput) -> Self {
        let passed = expectation.is_met_by(&output.stdout);
        let report = CheckReport {
            run_id,
            program: expectation.program().display().to_string(),
            expected: expectation.expected().to_string(),
            output,
        };

        if passed {
            TestOutcome::Pass(report)
        } else {
            TestOutcome::Fail(report)
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, TestOutcome::Pass(_))
    }

    pub fn report(&self) -> &CheckReport {
        match self {
            TestOutcome::Pass(report) | TestOutcome::Fail(report) => report,
        }
    }

    /// Turn a failed verdict into an error carrying the full captured stdout
    ///
    /// # Errors
    /// - SmokeError::Assertion if the outcome is `Fail`
    pub fn into_assertion(self) -> crate::Result<ProcessOutput> {
        match self {
            TestOutcome::Pass(report) => Ok(report.output),
            TestOutcome::Fail(report) => Err(crate::SmokeError::Assertion {
                expected: report.expected,
                stdout: report.output.stdout,
            }),
        }
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestOutcome::Pass(_) => write!(f, "PASS"),
            TestOutcome::Fail(_) => write!(f, "FAIL"),
        }
    }
}
