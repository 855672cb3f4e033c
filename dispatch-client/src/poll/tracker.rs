//! Asynchronous export tracking

use dispatch_core::domain::export::ExportStatus;
use tracing::{debug, info};

use super::Outcome;
use super::fetch::StatusFetcher;
use super::wait::WaitStrategy;
use crate::error::Result;

/// Polls an export job until the server reports it ready
///
/// Progress is reported only when the percentage strictly increases, so a
/// repeated or lower value never produces another tick. Downloading the
/// artifact is left to the caller and should only happen on success.
pub struct ExportTracker<F, W> {
    fetcher: F,
    wait: W,
}

impl<F: StatusFetcher, W: WaitStrategy> ExportTracker<F, W> {
    pub fn new(fetcher: F, wait: W) -> Self {
        Self { fetcher, wait }
    }

    /// Give back the fetcher and wait strategy
    pub fn into_parts(self) -> (F, W) {
        (self.fetcher, self.wait)
    }

    /// Poll `initial.token` until ready or cancelled
    ///
    /// `on_progress` receives the new percentage each time it increases.
    /// Exports have no failed state, so completion is always
    /// `Completed { success: true }`; everything else is an error or
    /// [`Outcome::Cancelled`].
    pub async fn track_until_ready<P>(
        &mut self,
        initial: &ExportStatus,
        mut on_progress: P,
    ) -> Result<Outcome>
    where
        P: FnMut(u32),
    {
        let mut last_pct = initial.percentage;

        loop {
            let status = self.fetcher.fetch_status(&initial.token).await?;
            debug!(
                "Export {}: {}% (ready: {})",
                initial.token, status.percentage, status.ready
            );

            if status.percentage > last_pct {
                on_progress(status.percentage);
                last_pct = status.percentage;
            }

            if status.ready {
                info!("Export {} ready", initial.token);
                return Ok(Outcome::Completed { success: true });
            }

            if !self.wait.wait().await {
                info!("Export {} tracking cancelled at {}%", initial.token, last_pct);
                return Ok(Outcome::Cancelled);
            }
        }
    }
}
