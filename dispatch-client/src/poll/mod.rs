//! Polling engine
//!
//! Follows server-side work that does not complete immediately. Two loops
//! share the same fetch / deliver / wait shape:
//! - [`OutputSession`] tails execution console output through an
//!   offset/last-modified cursor
//! - [`ExportTracker`] polls an export job by token until it is ready
//!
//! Polling is strictly sequential. The only suspension point between fetches
//! is [`WaitStrategy::wait`], which is also where cancellation is observed.

mod cursor;
mod decompact;
mod fetch;
mod format;
mod receiver;
mod session;
mod tracker;
mod wait;

pub use cursor::{Cursor, DEFAULT_MAX_LINES};
pub use decompact::{decompact, decompact_entries};
pub use fetch::{ExecutionOutput, ExportProgress, OutputFetcher, StatusFetcher};
pub use format::OutputFormat;
pub use receiver::{LevelRouter, OutputChannels, Receiver};
pub use session::{OutputSession, StartMode};
pub use tracker::ExportTracker;
pub use wait::{DEFAULT_POLL_INTERVAL, IntervalWait, WaitStrategy};

/// Terminal result of a polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server reported completion
    Completed {
        /// Success as reported by the server itself
        success: bool,
    },
    /// Polling was stopped by the wait strategy before completion
    Cancelled,
}

impl Outcome {
    /// True only for a completed, successful run
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Completed { success: true })
    }
}

#[cfg(test)]
pub(crate) mod testing;
