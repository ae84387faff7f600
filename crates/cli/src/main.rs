//! Hello Smoke CLI - runs a greeting program and checks its stdout
//! Exit codes: 0 pass, 1 assertion failure, 2 execution failure

mod logging;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

use hello_smoke_core::application::constants::{
    DEFAULT_GREETING, DEFAULT_PROGRAM_NAME, EXIT_ASSERTION_FAILURE, EXIT_EXECUTION_FAILURE,
    EXIT_PASS,
};
use hello_smoke_core::application::SmokeTestRunner;
use hello_smoke_core::domain::TestOutcome;
use hello_smoke_core::port::id_provider::UuidProvider;
use hello_smoke_core::port::time_provider::SystemTimeProvider;
use hello_smoke_infra_system::SubprocessRunner;

#[derive(Parser)]
#[command(name = "hello-smoke")]
#[command(about = "Run a greeting program and check its stdout", long_about = None)]
#[command(version)]
struct Cli {
    /// Program to run with no arguments
    /// (default: the bundled `hello` next to this binary, else `hello` on PATH)
    program: Option<PathBuf>,

    /// Text that must appear somewhere in the program's stdout
    #[arg(short, long, default_value = DEFAULT_GREETING)]
    expect: String,

    /// Report format on stdout
    #[arg(long, value_enum, default_value_t = Format::Pretty)]
    format: Format,

    /// Log format on stderr
    #[arg(long, value_enum, env = "HELLO_SMOKE_LOG_FORMAT", default_value_t = Format::Pretty)]
    log_format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Pretty,
    Json,
}

fn default_program() -> PathBuf {
    let file_name = format!("{}{}", DEFAULT_PROGRAM_NAME, std::env::consts::EXE_SUFFIX);

    std::env::current_exe()
        .ok()
        .map(|exe| exe.with_file_name(&file_name))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM_NAME))
}

async fn run(cli: &Cli) -> Result<TestOutcome> {
    let program = cli.program.clone().unwrap_or_else(default_program);

    // DI wiring
    let time_provider = Arc::new(SystemTimeProvider);
    let process_runner = Arc::new(SubprocessRunner::new(time_provider));
    let runner = SmokeTestRunner::new(process_runner, Arc::new(UuidProvider));

    runner
        .run_and_check(&program, &cli.expect)
        .await
        .with_context(|| format!("Could not check {}", program.display()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.log_format) {
        eprintln!("{} {:#}", "warning: logging disabled:".yellow(), e);
    }

    info!("Hello Smoke v{} starting", hello_smoke_core::VERSION);

    let outcome = match run(&cli).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            return ExitCode::from(EXIT_EXECUTION_FAILURE);
        }
    };

    if let Err(e) = report::print_report(&outcome, cli.format) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        return ExitCode::from(EXIT_EXECUTION_FAILURE);
    }

    match outcome.into_assertion() {
        Ok(_) => ExitCode::from(EXIT_PASS),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(EXIT_ASSERTION_FAILURE)
        }
    }
}
