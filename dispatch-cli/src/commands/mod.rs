//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod execution;
mod project;

pub use execution::ExecutionCommands;
pub use project::ProjectCommands;

use anyhow::Result;
use clap::Subcommand;
use tokio_util::sync::CancellationToken;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Execution inspection and output following
    Executions {
        #[command(subcommand)]
        command: ExecutionCommands,
    },
    /// Project archives
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
/// * `cancel` - Cancelled when the user interrupts a polling command
pub async fn handle_command(
    command: Commands,
    config: &Config,
    cancel: CancellationToken,
) -> Result<()> {
    match command {
        Commands::Executions { command } => {
            execution::handle_execution_command(command, config, cancel).await
        }
        Commands::Projects { command } => {
            project::handle_project_command(command, config, cancel).await
        }
    }
}
