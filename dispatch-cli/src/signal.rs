//! Ctrl-C handling
//!
//! The first interrupt cancels polling at its next wait; a second one exits
//! immediately, even in the middle of a request.

use colored::*;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Exit status used when interrupted twice
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Returns a token that is cancelled on the first Ctrl-C
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Unable to listen for Ctrl-C: {}", e);
            return;
        }
        eprintln!(
            "{}",
            "Interrupted, stopping after the current request (Ctrl-C again to exit now)".yellow()
        );
        token.cancel();

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    });

    cancel
}
