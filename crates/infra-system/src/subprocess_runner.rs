// Subprocess runner implementation
// reason: async-trait, tokio for async process management (ADR-001)
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::{debug, info};

use hello_smoke_core::domain::ProcessOutput;
use hello_smoke_core::port::{ExecutionError, ProcessRunner, TimeProvider};

/// Subprocess runner
/// Launches the program directly (no shell, no arguments) and waits for exit
pub struct SubprocessRunner {
    time_provider: Arc<dyn TimeProvider>,
}

impl SubprocessRunner {
    /// Create a new subprocess runner
    ///
    /// # Arguments
    /// * `time_provider` - Time provider for duration tracking
    ///
    /// # Example
    /// ```ignore
    /// let runner = SubprocessRunner::new(Arc::new(SystemTimeProvider));
    /// ```
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { time_provider }
    }

    /// Spawn child process and wait for output
    async fn spawn_and_wait(&self, program: &Path) -> Result<std::process::Output, ExecutionError> {
        let child = Command::new(program)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ExecutionError::SpawnFailed {
                program: program.display().to_string(),
                reason: e.to_string(),
            })?;

        debug!(pid = ?child.id(), "Child process spawned");

        child
            .wait_with_output()
            .await
            .map_err(|e| ExecutionError::IoError(e.to_string()))
    }

    /// Build process output from raw output (lossy UTF-8)
    fn build_output(&self, output: std::process::Output, duration_ms: i64) -> ProcessOutput {
        ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
            duration_ms,
        }
    }
}

#[async_trait]
impl ProcessRunner for SubprocessRunner {
    async fn run(&self, program: &Path) -> Result<ProcessOutput, ExecutionError> {
        let start_time = self.time_provider.now_millis();

        info!(program = %program.display(), "Starting subprocess");

        let output = self.spawn_and_wait(program).await?;

        let duration_ms = self.time_provider.now_millis() - start_time;
        let result = self.build_output(output, duration_ms);

        info!(
            program = %program.display(),
            duration_ms = %duration_ms,
            exit_code = ?result.exit_code,
            stdout_bytes = result.stdout.len(),
            "Subprocess completed"
        );

        Ok(result)
    }
}
