//! Execution domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single run of a job or ad-hoc command on the orchestration server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Execution {
    pub id: i64,
    pub status: ExecutionStatus,
    pub project: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub argstring: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub job: Option<JobReference>,
    #[serde(rename = "date-started", default)]
    pub date_started: Option<DateStamp>,
    #[serde(rename = "date-ended", default)]
    pub date_ended: Option<DateStamp>,
}

impl Execution {
    /// Wall-clock duration, if the execution has both start and end dates
    pub fn duration(&self) -> Option<chrono::Duration> {
        match (&self.date_started, &self.date_ended) {
            (Some(start), Some(end)) => Some(end.date.signed_duration_since(start.date)),
            _ => None,
        }
    }
}

/// Job that an execution belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReference {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
}

/// Timestamp as reported by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateStamp {
    pub unixtime: i64,
    pub date: DateTime<Utc>,
}

/// Execution status label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionStatus {
    Running,
    Succeeded,
    Failed,
    Aborted,
    Timedout,
    FailedWithRetry,
    Scheduled,
    #[serde(other)]
    Other,
}

impl ExecutionStatus {
    /// Whether the execution can no longer change state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ExecutionStatus::Running | ExecutionStatus::Scheduled)
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionStatus::Running => write!(f, "running"),
            ExecutionStatus::Succeeded => write!(f, "succeeded"),
            ExecutionStatus::Failed => write!(f, "failed"),
            ExecutionStatus::Aborted => write!(f, "aborted"),
            ExecutionStatus::Timedout => write!(f, "timedout"),
            ExecutionStatus::FailedWithRetry => write!(f, "failed-with-retry"),
            ExecutionStatus::Scheduled => write!(f, "scheduled"),
            ExecutionStatus::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_execution() {
        let execution: Execution = serde_json::from_value(json!({
            "id": 123,
            "status": "failed-with-retry",
            "project": "ops",
            "user": "admin",
            "job": {"id": "a1b2", "name": "deploy", "group": "web"},
            "date-started": {"unixtime": 1700000000000i64, "date": "2023-11-14T22:13:20Z"},
            "date-ended": {"unixtime": 1700000030000i64, "date": "2023-11-14T22:13:50Z"}
        }))
        .unwrap();

        assert_eq!(execution.id, 123);
        assert_eq!(execution.status, ExecutionStatus::FailedWithRetry);
        assert!(execution.status.is_terminal());
        assert_eq!(execution.job.as_ref().unwrap().name, "deploy");
        assert_eq!(execution.duration().unwrap().num_seconds(), 30);
    }

    #[test]
    fn test_running_without_end_date() {
        let execution: Execution = serde_json::from_value(json!({
            "id": 7,
            "status": "running",
            "project": "ops"
        }))
        .unwrap();

        assert!(!execution.status.is_terminal());
        assert!(execution.duration().is_none());
    }

    #[test]
    fn test_unknown_status() {
        let status: ExecutionStatus = serde_json::from_value(json!("queued-somewhere")).unwrap();
        assert_eq!(status, ExecutionStatus::Other);
    }
}
