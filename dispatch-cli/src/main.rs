//! Dispatch CLI
//!
//! Command-line interface for following executions and exports on a remote
//! job-orchestration server.

mod commands;
mod config;
mod console;
mod signal;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dispatch")]
#[command(about = "Job orchestration server CLI", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(long, env = "DISPATCH_URL", default_value = "http://localhost:4440")]
    url: String,

    /// API token
    #[arg(long, env = "DISPATCH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Delay between polls, in milliseconds
    #[arg(long, env = "DISPATCH_POLL_INTERVAL_MS", default_value_t = 2000)]
    poll_interval_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with followed output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dispatch_cli=warn,dispatch_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        server_url: cli.url,
        token: cli.token,
        poll_interval: Duration::from_millis(cli.poll_interval_ms),
    };
    config.validate()?;

    let cancel = signal::cancel_on_ctrl_c();

    handle_command(cli.command, &config, cancel).await
}
