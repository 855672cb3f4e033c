//! Console output channels
//!
//! Normal output goes to stdout; warnings and errors go to stderr in color.

use colored::*;
use dispatch_client::poll::OutputChannels;
use std::io::Write;

/// Terminal implementation of [`OutputChannels`]
#[derive(Debug, Default)]
pub struct ConsoleChannels {
    /// Whether progress markers were printed without a trailing newline
    progress_pending: bool,
}

impl ConsoleChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminate a pending line of progress markers
    pub fn finish(&mut self) {
        if self.progress_pending {
            println!();
            self.progress_pending = false;
        }
    }
}

impl OutputChannels for ConsoleChannels {
    fn output(&mut self, line: &str) {
        println!("{}", line);
    }

    fn warning(&mut self, line: &str) {
        eprintln!("{}", line.yellow());
    }

    fn error(&mut self, line: &str) {
        eprintln!("{}", line.red());
    }

    fn progress(&mut self) {
        print!("{}", ".".dimmed());
        let _ = std::io::stdout().flush();
        self.progress_pending = true;
    }
}
