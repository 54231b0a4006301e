//! CLI adapter.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, InstallOutcome, StackStatus};

#[derive(Parser)]
#[command(name = "stackup")]
#[command(version)]
#[command(
    about = "Interactive installer for a containerized web stack",
    long_about = "Asks for site, database and admin settings, writes the .env file \
                  (and the reverse-proxy config when a domain is set) next to the \
                  shipped template, then optionally starts the stack with docker compose."
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();
    init_tracing();

    match api::install() {
        Ok(outcome) => report(&outcome),
        Err(e) if e.is_cancellation() => {
            println!("Cancelled. Nothing was changed.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn report(outcome: &InstallOutcome) {
    match outcome {
        InstallOutcome::StartedExisting { stack } => {
            tracing::info!("existing installation handled: {:?}", stack);
        }
        InstallOutcome::Configured(report) => {
            tracing::info!(
                "configured {} ({} backup(s), stack {:?})",
                report.env_file.display(),
                report.backups.len(),
                report.stack
            );
            if report.stack == StackStatus::Unavailable {
                tracing::warn!("stack was not started");
            }
        }
    }
}
