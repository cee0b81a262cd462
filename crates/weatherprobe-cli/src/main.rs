// crates/weatherprobe-cli/src/main.rs
// ============================================================================
// Module: Weatherprobe CLI Entry Point
// Description: Contract probe runner for the weather subscription API.
// Purpose: Run the canonical suite once and report an aggregate exit code.
// Dependencies: clap, thiserror, tokio, weatherprobe-core
// ============================================================================

//! ## Overview
//! The runner resolves the endpoint target once, executes the canonical probe
//! suite against it, and reports one line per probe. Probes stay independent:
//! a failing probe never blocks the rest, and the process exits non-zero when
//! any probe fails so CI can gate on the aggregate result.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use weatherprobe_core::config::ConfigError;
use weatherprobe_core::config::EndpointConfig;
use weatherprobe_core::config::timeout_from_env;
use weatherprobe_core::context::RequestContext;
use weatherprobe_core::probe::ProbeReport;
use weatherprobe_core::suite::contract_suite;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Contract probe runner for a weather subscription API.
#[derive(Debug, Parser)]
#[command(name = "weatherprobe", version, about = "Runs contract probes against a weather subscription API")]
struct Cli {
    /// Base URL override; wins over the APP_BASE_URL environment variable.
    #[arg(long)]
    base_url: Option<String>,
    /// Per-request timeout override in seconds.
    #[arg(long)]
    timeout_sec: Option<u64>,
}

/// Runner error carrying a human-readable message.
#[derive(Debug, Error)]
#[error("{message}")]
struct RunnerError {
    /// Human-readable error message.
    message: String,
}

impl From<ConfigError> for RunnerError {
    fn from(err: ConfigError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Runner result alias for fallible operations.
type RunnerResult<T> = Result<T, RunnerError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Resolves configuration, runs the suite, and reports the aggregate result.
async fn run() -> RunnerResult<ExitCode> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let context = RequestContext::new(config)?;
    let cases = contract_suite();

    let mut failures = 0usize;
    for (case, outcome) in cases.iter().zip(context.run_all(&cases).await) {
        match outcome {
            Ok(report) => {
                if !report.passed() {
                    failures += 1;
                }
                write_stdout_line(&format_report(&report)).map_err(output_error)?;
            }
            Err(err) => {
                failures += 1;
                write_stdout_line(&format!("FAIL {}: {err}", case.name))
                    .map_err(output_error)?;
            }
        }
    }

    let total = cases.len();
    let passed = total - failures;
    write_stdout_line(&format!(
        "{passed}/{total} probes passed against {}",
        context.config().base_url()
    ))
    .map_err(output_error)?;
    Ok(if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Applies CLI overrides on top of environment-resolved configuration.
///
/// Precedence is flag over environment over default, per setting: a base-URL
/// flag still leaves the environment timeout override in effect.
fn resolve_config(cli: &Cli) -> Result<EndpointConfig, ConfigError> {
    let mut config = match &cli.base_url {
        Some(base_url) => EndpointConfig::new(base_url)?.with_timeout(timeout_from_env()?),
        None => EndpointConfig::from_env()?,
    };
    if let Some(secs) = cli.timeout_sec {
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                name: "--timeout-sec",
            });
        }
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

// ============================================================================
// SECTION: Reporting
// ============================================================================

/// Formats a one-line report for a completed probe.
fn format_report(report: &ProbeReport) -> String {
    if report.passed() {
        format!("PASS {} (status {})", report.name, report.status)
    } else {
        let detail = report
            .violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        format!("FAIL {} (status {}): {detail}", report.name, report.status)
    }
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Maps an output write failure into a runner error.
fn output_error(error: std::io::Error) -> RunnerError {
    RunnerError {
        message: format!("failed to write output: {error}"),
    }
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
