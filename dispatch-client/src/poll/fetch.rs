//! Fetchers binding the polling loops to server endpoints

use async_trait::async_trait;
use dispatch_core::domain::export::ExportStatus;
use dispatch_core::domain::output::OutputBatch;

use super::cursor::Cursor;
use crate::OrchestratorClient;
use crate::error::Result;

/// Source of console output batches for one execution
#[async_trait]
pub trait OutputFetcher: Send {
    /// Fetch output produced after `cursor`
    async fn fetch(&mut self, cursor: Cursor) -> Result<OutputBatch>;

    /// Fetch the last `lines` lines of output
    async fn fetch_tail(&mut self, lines: u32) -> Result<OutputBatch>;
}

/// Source of status snapshots for one export job
#[async_trait]
pub trait StatusFetcher: Send {
    async fn fetch_status(&mut self, token: &str) -> Result<ExportStatus>;
}

/// Output of a single execution, read through the REST API
#[derive(Debug, Clone)]
pub struct ExecutionOutput {
    client: OrchestratorClient,
    execution_id: String,
}

impl ExecutionOutput {
    pub fn new(client: OrchestratorClient, execution_id: impl Into<String>) -> Self {
        Self {
            client,
            execution_id: execution_id.into(),
        }
    }
}

#[async_trait]
impl OutputFetcher for ExecutionOutput {
    async fn fetch(&mut self, cursor: Cursor) -> Result<OutputBatch> {
        self.client.get_output(&self.execution_id, cursor).await
    }

    async fn fetch_tail(&mut self, lines: u32) -> Result<OutputBatch> {
        self.client.tail_output(&self.execution_id, lines).await
    }
}

/// Export status of a single project, read through the REST API
#[derive(Debug, Clone)]
pub struct ExportProgress {
    client: OrchestratorClient,
    project: String,
}

impl ExportProgress {
    pub fn new(client: OrchestratorClient, project: impl Into<String>) -> Self {
        Self {
            client,
            project: project.into(),
        }
    }
}

#[async_trait]
impl StatusFetcher for ExportProgress {
    async fn fetch_status(&mut self, token: &str) -> Result<ExportStatus> {
        self.client.export_status(&self.project, token).await
    }
}
