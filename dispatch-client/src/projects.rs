//! Project export API endpoints

use crate::OrchestratorClient;
use crate::error::Result;
use dispatch_core::domain::export::ExportStatus;

impl OrchestratorClient {
    // =============================================================================
    // Asynchronous Export
    // =============================================================================

    /// Start packaging a project archive on the server
    ///
    /// # Returns
    /// The initial export status, carrying the token used for later polls
    pub async fn start_export(&self, project: &str) -> Result<ExportStatus> {
        let url = self.api_url(&format!("project/{}/export/async", project));
        let response = self.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get the status of a running export
    ///
    /// # Arguments
    /// * `project` - The project name
    /// * `token` - Token returned by [`OrchestratorClient::start_export`]
    pub async fn export_status(&self, project: &str, token: &str) -> Result<ExportStatus> {
        let url = self.api_url(&format!("project/{}/export/status/{}", project, token));
        let response = self.get(&url).send().await?;

        self.handle_response(response)
            .await
            .map_err(|e| e.for_export(project, token))
    }

    /// Download a finished export archive
    pub async fn download_export(&self, project: &str, token: &str) -> Result<Vec<u8>> {
        let url = self.api_url(&format!("project/{}/export/download/{}", project, token));
        let response = self.get(&url).send().await?;

        self.handle_bytes_response(response)
            .await
            .map_err(|e| e.for_export(project, token))
    }
}
