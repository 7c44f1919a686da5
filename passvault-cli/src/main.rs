//! PassVault command-line entry point
//!
//! Loads configuration, syncs presets from the Config Service, then runs one
//! command. Only command output goes to stdout; logs and status go to stderr
//! so `passvault derive` can be piped.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use passvault_app::{AppConfig, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr; `RUST_LOG` is honored, `--verbose` raises the floor to debug.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    tracing::debug!("Effective config: endpoint={}", config.endpoint);

    let state = AppState::from_config(config).await?;
    if state.is_read_only() {
        eprintln!("Offline mode: Config Service unreachable, presets are read-only");
    }

    commands::execute(&state, cli.command).await
}
