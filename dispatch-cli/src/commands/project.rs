//! Project command handlers
//!
//! Handles asynchronous project export: start the export on the server,
//! track it until ready and download the archive.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use dispatch_client::OrchestratorClient;
use dispatch_client::poll::{ExportProgress, ExportTracker, IntervalWait, Outcome};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::Config;

/// Project subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Export a project archive
    Export {
        /// Project name
        #[arg(short, long)]
        project: String,

        /// Destination file for the archive
        #[arg(short, long)]
        file: PathBuf,
    },
}

/// Handle project commands
///
/// # Arguments
/// * `command` - The project command to execute
/// * `config` - The CLI configuration
/// * `cancel` - Stops export tracking at the next poll
pub async fn handle_project_command(
    command: ProjectCommands,
    config: &Config,
    cancel: CancellationToken,
) -> Result<()> {
    let client = config.client();

    match command {
        ProjectCommands::Export { project, file } => {
            export_project(client, config, &project, &file, cancel).await
        }
    }
}

/// Run an asynchronous export and save the archive once ready
async fn export_project(
    client: OrchestratorClient,
    config: &Config,
    project: &str,
    file: &Path,
    cancel: CancellationToken,
) -> Result<()> {
    let initial = client
        .start_export(project)
        .await
        .with_context(|| format!("Failed to start export of project {}", project))?;

    info!("Export of {} started with token {}", project, initial.token);
    print!("{}", format!("Exporting {}: ", project).bold());
    let _ = std::io::stdout().flush();

    let fetcher = ExportProgress::new(client.clone(), project);
    let wait = IntervalWait::new(config.poll_interval, cancel);
    let mut tracker = ExportTracker::new(fetcher, wait);

    let outcome = tracker
        .track_until_ready(&initial, |pct| {
            print!("{}", format!("{}% ", pct).dimmed());
            let _ = std::io::stdout().flush();
        })
        .await;
    println!();

    let outcome =
        outcome.with_context(|| format!("Failed to track export of project {}", project))?;

    match outcome {
        Outcome::Cancelled => {
            println!(
                "{}",
                format!("Stopped waiting for export of {} (best effort)", project).yellow()
            );
            Ok(())
        }
        Outcome::Completed { .. } => {
            let archive = client
                .download_export(project, &initial.token)
                .await
                .with_context(|| format!("Failed to download export of project {}", project))?;

            tokio::fs::write(file, &archive)
                .await
                .with_context(|| format!("Failed to write archive to {}", file.display()))?;

            println!(
                "{}",
                format!(
                    "✓ Exported {} ({} bytes) to {}",
                    project,
                    archive.len(),
                    file.display()
                )
                .green()
            );
            Ok(())
        }
    }
}
