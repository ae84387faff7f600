//! Check report rendering (stdout)

use anyhow::Result;
use colored::Colorize;
use hello_smoke_core::domain::TestOutcome;
use tabled::{Table, Tabled};

use crate::Format;

#[derive(Tabled)]
struct SummaryRow {
    run_id: String,
    program: String,
    outcome: String,
    exit_code: String,
    duration_ms: i64,
}

impl From<&TestOutcome> for SummaryRow {
    fn from(outcome: &TestOutcome) -> Self {
        let report = outcome.report();
        Self {
            run_id: report.run_id.clone(),
            program: report.program.clone(),
            outcome: outcome.to_string(),
            exit_code: report
                .output
                .exit_code
                .map(|code| code.to_string())
                .unwrap_or_else(|| "signal".to_string()),
            duration_ms: report.output.duration_ms,
        }
    }
}

pub fn print_report(outcome: &TestOutcome, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", outcome.to_json_pretty()?),
        Format::Pretty => print_pretty(outcome),
    }
    Ok(())
}

fn print_pretty(outcome: &TestOutcome) {
    let report = outcome.report();

    if outcome.is_pass() {
        println!(
            "{}",
            format!("✓ PASS: {:?} found in stdout", report.expected)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("✗ FAIL: {:?} not found in stdout", report.expected)
                .red()
                .bold()
        );
    }
    println!();

    let table = Table::new(vec![SummaryRow::from(outcome)]).to_string();
    println!("{}", table);

    if outcome.is_pass() {
        println!();
        println!(
            "{} {}",
            "Captured stdout:".cyan().bold(),
            report.output.stdout.trim()
        );
    } else {
        println!();
        println!("{}", "Captured stdout:".cyan().bold());
        println!("{}", report.output.stdout);
        if !report.output.stderr.is_empty() {
            println!("{}", "Captured stderr:".cyan().bold());
            println!("{}", report.output.stderr);
        }
    }
}
