//! Execution-related API endpoints

use crate::OrchestratorClient;
use crate::error::Result;
use crate::poll::Cursor;
use dispatch_core::domain::execution::Execution;
use dispatch_core::domain::output::OutputBatch;
use dispatch_core::dto::execution::ExecutionList;

impl OrchestratorClient {
    // =============================================================================
    // Execution Query
    // =============================================================================

    /// Get an execution by ID
    ///
    /// # Arguments
    /// * `execution_id` - The execution ID
    pub async fn get_execution(&self, execution_id: &str) -> Result<Execution> {
        let url = self.api_url(&format!("execution/{}", execution_id));
        let response = self.get(&url).send().await?;

        self.handle_response(response)
            .await
            .map_err(|e| e.for_execution(execution_id))
    }

    /// List one page of executions for a project
    ///
    /// # Arguments
    /// * `project` - The project name
    /// * `max` - Page size
    /// * `offset` - Index of the first execution to return
    pub async fn list_executions(
        &self,
        project: &str,
        max: u32,
        offset: u32,
    ) -> Result<ExecutionList> {
        let url = self.api_url(&format!(
            "project/{}/executions?max={}&offset={}",
            project, max, offset
        ));
        let response = self.get(&url).send().await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Execution Output
    // =============================================================================

    /// Get console output produced after `cursor`
    ///
    /// The cursor's offset and last-modified values are sent back verbatim.
    pub async fn get_output(&self, execution_id: &str, cursor: Cursor) -> Result<OutputBatch> {
        let url = self.api_url(&format!(
            "execution/{}/output?offset={}&lastmod={}&maxlines={}&compacted=true",
            execution_id, cursor.offset, cursor.last_modified, cursor.max_lines
        ));
        let response = self.get(&url).send().await?;

        self.handle_response(response)
            .await
            .map_err(|e| e.for_execution(execution_id))
    }

    /// Get the last `lines` lines of console output
    pub async fn tail_output(&self, execution_id: &str, lines: u32) -> Result<OutputBatch> {
        let url = self.api_url(&format!(
            "execution/{}/output?tail={}&compacted=true",
            execution_id, lines
        ));
        let response = self.get(&url).send().await?;

        self.handle_response(response)
            .await
            .map_err(|e| e.for_execution(execution_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{API_VERSION, ClientError};
    use dispatch_core::domain::execution::ExecutionStatus;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_path(rest: &str) -> String {
        format!("/api/{}/{}", API_VERSION, rest)
    }

    #[tokio::test]
    async fn get_output_sends_cursor_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api_path("execution/123/output")))
            .and(query_param("offset", "2048"))
            .and(query_param("lastmod", "1700000000000"))
            .and(query_param("maxlines", "500"))
            .and(query_param("compacted", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "123",
                "offset": "4096",
                "lastModified": "1700000001000",
                "completed": false,
                "execCompleted": false,
                "execState": "running",
                "entries": [{"level": "NORMAL", "log": "building"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(server.uri());
        let cursor = Cursor {
            offset: 2048,
            last_modified: 1_700_000_000_000,
            max_lines: 500,
        };
        let batch = client.get_output("123", cursor).await.unwrap();

        assert_eq!(batch.offset, 4096);
        assert_eq!(batch.last_modified, 1_700_000_001_000);
        assert_eq!(batch.entries.len(), 1);
        assert_eq!(batch.entries[0].log, "building");
    }

    #[tokio::test]
    async fn tail_output_requests_line_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api_path("execution/9/output")))
            .and(query_param("tail", "25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "offset": 100,
                "lastModified": 5,
                "entries": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(server.uri());
        let batch = client.tail_output("9", 25).await.unwrap();

        assert_eq!(batch.offset, 100);
        assert!(batch.entries.is_empty());
    }

    #[tokio::test]
    async fn missing_execution_is_reported_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api_path("execution/404")))
            .respond_with(ResponseTemplate::new(404).set_body_string("execution not found"))
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(server.uri());
        let err = client.get_execution("404").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, ClientError::UnknownExecution(ref id) if id == "404"));
    }

    #[tokio::test]
    async fn token_is_sent_as_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api_path("execution/1")))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "status": "succeeded",
                "project": "ops"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(server.uri()).with_token("s3cret");
        let execution = client.get_execution("1").await.unwrap();

        assert_eq!(execution.status, ExecutionStatus::Succeeded);
    }

    #[tokio::test]
    async fn list_executions_returns_paging() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api_path("project/ops/executions")))
            .and(query_param("max", "10"))
            .and(query_param("offset", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "paging": {"count": 1, "total": 11, "max": 10, "offset": 10},
                "executions": [{"id": 42, "status": "failed", "project": "ops"}]
            })))
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(server.uri());
        let page = client.list_executions("ops", 10, 10).await.unwrap();

        assert_eq!(page.executions.len(), 1);
        assert!(!page.paging.has_more_results());
        assert_eq!(page.paging.pagenum(), 2);
    }

    #[tokio::test]
    async fn output_server_error_stays_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api_path("execution/5/output")))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(server.uri());
        let err = client.tail_output("5", 1).await.unwrap_err();

        assert!(err.is_server_error());
        assert!(err.to_string().contains("maintenance"));
    }
}
