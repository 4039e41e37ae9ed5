//! Main entry point for the harness binary
//!
//! Wires the real services into the orchestrator and maps the run outcome
//! to the process exit code: 0 when both phases pass, 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use harness::config::HarnessConfig;
use harness::error::HarnessError;
use harness::logging;
use harness::orchestrator::Orchestrator;
use harness::services::{CommandInvoker, DirFixturePreparer};

/// Verification harness for a persistent store client
#[derive(Parser)]
#[command(name = "harness")]
#[command(about = "Runs the populate/validate client against a clean fixture directory and reports pass/fail")]
struct Args {
    /// Path to the client binary implementing the populate and validate phases
    #[arg(long)]
    client: PathBuf,

    /// Fixture directory handed to the client via --dbdir, cleared before the run
    #[arg(long)]
    dbdir: PathBuf,

    /// Per-phase timeout in seconds (waits indefinitely when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(&args.log_level);

    let config = HarnessConfig::builder()
        .client(args.client)
        .dbdir(args.dbdir)
        .phase_timeout(args.timeout_secs.map(Duration::from_secs))
        .log_level(args.log_level)
        .build();

    if !config.is_valid() {
        let err = HarnessError::Config {
            field: "client".to_string(),
        };
        tracing::error!("❌ {}", err);
        return ExitCode::from(1);
    }

    let preparer = DirFixturePreparer::new(config.dbdir.clone());
    let invoker = CommandInvoker::new(config);
    let orchestrator = Orchestrator::new(preparer, invoker);

    match orchestrator.run().await {
        Ok(outcome) => {
            if outcome.success {
                tracing::info!("✅ verification run passed");
            } else if let Some(phase) = outcome.failing_phase {
                tracing::error!("❌ verification run failed during {}", phase);
            }
            ExitCode::from(outcome.exit_code() as u8)
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            ExitCode::from(1)
        }
    }
}
