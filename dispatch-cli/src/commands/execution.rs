//! Execution command handlers
//!
//! Handles viewing execution details, listing executions of a project and
//! following live console output.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;
use dispatch_client::OrchestratorClient;
use dispatch_client::poll::{
    DEFAULT_MAX_LINES, ExecutionOutput, IntervalWait, LevelRouter, Outcome, OutputFormat,
    OutputSession, StartMode,
};
use dispatch_core::domain::execution::{Execution, ExecutionStatus};
use dispatch_core::domain::paging::Paging;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::console::ConsoleChannels;

/// Execution subcommands
#[derive(Subcommand)]
pub enum ExecutionCommands {
    /// Follow the console output of an execution until it finishes
    Follow(FollowArgs),
    /// Show execution details
    Info {
        /// Execution ID
        id: String,
    },
    /// List executions of a project
    List {
        /// Project name
        #[arg(short, long)]
        project: String,

        /// Page size
        #[arg(long, default_value_t = 20)]
        max: u32,

        /// Index of the first execution to show
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

/// Options for following execution output
#[derive(Args)]
pub struct FollowArgs {
    /// Execution ID
    pub id: String,

    /// Start from the first line of output
    #[arg(short, long)]
    pub restart: bool,

    /// Start from the last N lines of output
    #[arg(short, long, default_value_t = 1, conflicts_with = "restart")]
    pub tail: u32,

    /// Maximum lines requested per poll
    #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
    pub max_lines: u32,

    /// Print a progress marker per batch instead of the output
    #[arg(long)]
    pub progress: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output template, e.g. "%time [%level] %node: %log"
    #[arg(long)]
    pub outformat: Option<String>,
}

impl FollowArgs {
    fn start_mode(&self) -> StartMode {
        if self.restart {
            StartMode::Restart
        } else {
            StartMode::Tail(self.tail)
        }
    }
}

/// Handle execution commands
///
/// # Arguments
/// * `command` - The execution command to execute
/// * `config` - The CLI configuration
/// * `cancel` - Stops output following at the next poll
pub async fn handle_execution_command(
    command: ExecutionCommands,
    config: &Config,
    cancel: CancellationToken,
) -> Result<()> {
    let client = config.client();

    match command {
        ExecutionCommands::Follow(args) => follow_execution(client, config, &args, cancel).await,
        ExecutionCommands::Info { id } => get_execution(&client, &id).await,
        ExecutionCommands::List {
            project,
            max,
            offset,
        } => list_executions(&client, &project, max, offset).await,
    }
}

/// Follow the output of an execution
async fn follow_execution(
    client: OrchestratorClient,
    config: &Config,
    args: &FollowArgs,
    cancel: CancellationToken,
) -> Result<()> {
    let fetcher = ExecutionOutput::new(client, &args.id);
    let wait = IntervalWait::new(config.poll_interval, cancel);
    let mut session = OutputSession::new(fetcher, wait)
        .start_mode(args.start_mode())
        .max_lines(args.max_lines);

    let mut router = LevelRouter::new(ConsoleChannels::new())
        .progress(args.progress)
        .quiet(args.quiet)
        .format(args.outformat.as_deref().map(OutputFormat::new));

    let outcome = session.follow(&mut router).await;
    router.into_channels().finish();

    let outcome = outcome
        .with_context(|| format!("Failed to follow output of execution {}", args.id))?;

    match outcome {
        Outcome::Completed { success: true } => {
            if !args.quiet {
                println!(
                    "{}",
                    format!("✓ Execution {} succeeded", args.id).green()
                );
            }
            Ok(())
        }
        Outcome::Completed { success: false } => {
            anyhow::bail!("Execution {} did not succeed", args.id)
        }
        Outcome::Cancelled => {
            println!(
                "{}",
                format!("Stopped following execution {} (best effort)", args.id).yellow()
            );
            Ok(())
        }
    }
}

/// Get and display a single execution
async fn get_execution(client: &OrchestratorClient, id: &str) -> Result<()> {
    let execution = client
        .get_execution(id)
        .await
        .with_context(|| format!("Failed to fetch execution {}", id))?;

    print_execution_details(&execution);

    if !execution.status.is_terminal() {
        println!();
        println!(
            "{}",
            format!("Still {}; follow it with: executions follow {}", execution.status, id).dimmed()
        );
    }

    Ok(())
}

/// List one page of executions for a project
async fn list_executions(
    client: &OrchestratorClient,
    project: &str,
    max: u32,
    offset: u32,
) -> Result<()> {
    let page = client
        .list_executions(project, max, offset)
        .await
        .with_context(|| format!("Failed to list executions of project {}", project))?;

    if page.executions.is_empty() {
        println!(
            "{}",
            format!("No executions found for project {}.", project).yellow()
        );
    } else {
        println!(
            "{}",
            format!("Executions of project {}:", project).bold()
        );
        println!();
        for execution in &page.executions {
            print_execution_summary(execution);
        }
    }

    print_paging_footer(&page.paging);

    Ok(())
}

/// Print an execution summary line block
fn print_execution_summary(execution: &Execution) {
    println!(
        "  {} Execution {}",
        "▸".cyan(),
        execution.id.to_string().bold()
    );
    println!("    Status:   {}", colorize_status(&execution.status));
    if let Some(job) = &execution.job {
        println!("    Job:      {}", job.name.dimmed());
    }
    if let Some(started) = &execution.date_started {
        println!(
            "    Started:  {}",
            started
                .date
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .dimmed()
        );
    }
    println!();
}

/// Print detailed execution information
fn print_execution_details(execution: &Execution) {
    println!("{}", "Execution Details:".bold());
    println!("  ID:          {}", execution.id.to_string().cyan());
    println!("  Project:     {}", execution.project);
    println!("  Status:      {}", colorize_status(&execution.status));

    if let Some(job) = &execution.job {
        match &job.group {
            Some(group) => println!("  Job:         {}/{}", group, job.name),
            None => println!("  Job:         {}", job.name),
        }
    }

    if let Some(user) = &execution.user {
        println!("  User:        {}", user);
    }

    if let Some(description) = &execution.description {
        println!("  Description: {}", description.dimmed());
    }

    if let Some(started) = &execution.date_started {
        println!(
            "  Started:     {}",
            started.date.format("%Y-%m-%d %H:%M:%S")
        );
    }

    if let Some(ended) = &execution.date_ended {
        println!("  Ended:       {}", ended.date.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(duration) = execution.duration() {
        println!("  Duration:    {}s", duration.num_seconds());
    }

    if let Some(permalink) = &execution.permalink {
        println!("  Link:        {}", permalink.dimmed());
    }
}

/// Print the page position and how to fetch the next page
fn print_paging_footer(paging: &Paging) {
    println!("{}", paging.to_string().dimmed());
    if paging.has_more_results() {
        println!(
            "{}",
            format!("More results: --offset {}", paging.next_page_offset()).dimmed()
        );
    }
}

/// Colorize execution status for display
fn colorize_status(status: &ExecutionStatus) -> colored::ColoredString {
    let status_str = status.to_string();
    match status {
        ExecutionStatus::Running | ExecutionStatus::Scheduled => status_str.cyan(),
        ExecutionStatus::Succeeded => status_str.green(),
        ExecutionStatus::Failed | ExecutionStatus::FailedWithRetry => status_str.red(),
        ExecutionStatus::Timedout => status_str.red(),
        ExecutionStatus::Aborted | ExecutionStatus::Other => status_str.dimmed(),
    }
}
