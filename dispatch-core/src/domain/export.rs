//! Asynchronous project export types

use serde::{Deserialize, Serialize};

/// Status of a server-side export job
///
/// The `token` identifies the job for its whole lifetime. `ready` flips to
/// true exactly once, after which the artifact can be downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportStatus {
    pub token: String,
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub percentage: u32,
}
