//! Execution output tailing

use tracing::{debug, info};

use super::Outcome;
use super::cursor::{Cursor, DEFAULT_MAX_LINES};
use super::decompact::decompact;
use super::fetch::OutputFetcher;
use super::receiver::Receiver;
use super::wait::WaitStrategy;
use crate::error::Result;

/// Where a session starts reading output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// From the very first line
    Restart,
    /// From the last N lines
    Tail(u32),
}

/// Follows the console output of one execution until it finishes
///
/// Each iteration delivers the decompacted entries of the current batch,
/// stops once the batch reports both `exec_completed` and `completed`, and
/// otherwise waits before fetching the next batch from the server's cursor.
/// Fetch errors abort the session; a cancelled wait ends it with
/// [`Outcome::Cancelled`].
pub struct OutputSession<F, W> {
    fetcher: F,
    wait: W,
    start: StartMode,
    max_lines: u32,
}

impl<F: OutputFetcher, W: WaitStrategy> OutputSession<F, W> {
    pub fn new(fetcher: F, wait: W) -> Self {
        Self {
            fetcher,
            wait,
            start: StartMode::Restart,
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    pub fn start_mode(mut self, start: StartMode) -> Self {
        self.start = start;
        self
    }

    pub fn max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Give back the fetcher and wait strategy
    pub fn into_parts(self) -> (F, W) {
        (self.fetcher, self.wait)
    }

    /// Run the session, delivering every batch to `receiver`
    pub async fn follow<R>(&mut self, receiver: &mut R) -> Result<Outcome>
    where
        R: Receiver + ?Sized,
    {
        let mut batch = match self.start {
            StartMode::Restart => self.fetcher.fetch(Cursor::start(self.max_lines)).await?,
            StartMode::Tail(lines) => self.fetcher.fetch_tail(lines).await?,
        };

        loop {
            let entries = decompact(&batch);
            debug!(
                "Received {} line(s) at offset {} (state: {})",
                entries.len(),
                batch.offset,
                batch.exec_state
            );
            receiver.receive(&entries);

            if batch.is_done() {
                let success = batch.succeeded();
                info!("Output complete, execution state: {}", batch.exec_state);
                return Ok(Outcome::Completed { success });
            }

            if !self.wait.wait().await {
                info!("Output following cancelled at offset {}", batch.offset);
                return Ok(Outcome::Cancelled);
            }

            let cursor = Cursor::after(&batch, self.max_lines);
            batch = self.fetcher.fetch(cursor).await?;
        }
    }
}
