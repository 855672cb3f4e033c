//! Wait strategies between polls

use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default delay between two polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Delay between polls with cooperative cancellation
///
/// Returns `true` when polling may continue and `false` when it was
/// cancelled. A cancelled wait is not an error: callers stop polling and
/// report a cancelled outcome without issuing another fetch.
#[async_trait]
pub trait WaitStrategy: Send {
    async fn wait(&mut self) -> bool;
}

/// Sleeps for a fixed interval unless the token is cancelled first
#[derive(Debug, Clone)]
pub struct IntervalWait {
    interval: Duration,
    cancel: CancellationToken,
}

impl IntervalWait {
    pub fn new(interval: Duration, cancel: CancellationToken) -> Self {
        Self { interval, cancel }
    }
}

#[async_trait]
impl WaitStrategy for IntervalWait {
    async fn wait(&mut self) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!("Wait interrupted by cancellation");
                false
            }
            _ = tokio::time::sleep(self.interval) => true,
        }
    }
}
