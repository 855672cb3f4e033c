//! In-memory fetchers and waits for exercising the polling loops

use async_trait::async_trait;
use dispatch_core::domain::export::ExportStatus;
use dispatch_core::domain::output::{LogEntry, LogLevel, OutputBatch};
use std::collections::VecDeque;

use super::cursor::Cursor;
use super::fetch::{OutputFetcher, StatusFetcher};
use super::wait::WaitStrategy;
use crate::error::{ClientError, Result};

/// Request observed by [`ScriptedOutput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRequest {
    Cursor(Cursor),
    Tail(u32),
}

/// Replays a fixed list of responses and records every request
#[derive(Default)]
pub struct ScriptedOutput {
    responses: VecDeque<Result<OutputBatch>>,
    pub requests: Vec<OutputRequest>,
}

impl ScriptedOutput {
    pub fn new(batches: Vec<OutputBatch>) -> Self {
        Self {
            responses: batches.into_iter().map(Ok).collect(),
            requests: Vec::new(),
        }
    }

    pub fn then_fail(mut self, status: u16) -> Self {
        self.responses
            .push_back(Err(ClientError::api_error(status, "scripted failure")));
        self
    }

    fn next_response(&mut self) -> Result<OutputBatch> {
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::ParseError("script exhausted".to_string())))
    }
}

#[async_trait]
impl OutputFetcher for ScriptedOutput {
    async fn fetch(&mut self, cursor: Cursor) -> Result<OutputBatch> {
        self.requests.push(OutputRequest::Cursor(cursor));
        self.next_response()
    }

    async fn fetch_tail(&mut self, lines: u32) -> Result<OutputBatch> {
        self.requests.push(OutputRequest::Tail(lines));
        self.next_response()
    }
}

/// Replays a fixed list of export statuses
#[derive(Default)]
pub struct ScriptedStatus {
    responses: VecDeque<Result<ExportStatus>>,
    pub tokens: Vec<String>,
}

impl ScriptedStatus {
    pub fn new(statuses: Vec<ExportStatus>) -> Self {
        Self {
            responses: statuses.into_iter().map(Ok).collect(),
            tokens: Vec::new(),
        }
    }

    pub fn then_fail(mut self, status: u16) -> Self {
        self.responses
            .push_back(Err(ClientError::api_error(status, "scripted failure")));
        self
    }
}

#[async_trait]
impl StatusFetcher for ScriptedStatus {
    async fn fetch_status(&mut self, token: &str) -> Result<ExportStatus> {
        self.tokens.push(token.to_string());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::ParseError("script exhausted".to_string())))
    }
}

/// Wait that never sleeps; answers from a script, then `true` forever
#[derive(Default)]
pub struct ScriptedWait {
    answers: VecDeque<bool>,
    pub calls: usize,
}

impl ScriptedWait {
    pub fn always() -> Self {
        Self::default()
    }

    pub fn answers(answers: Vec<bool>) -> Self {
        Self {
            answers: answers.into(),
            calls: 0,
        }
    }
}

#[async_trait]
impl WaitStrategy for ScriptedWait {
    async fn wait(&mut self) -> bool {
        self.calls += 1;
        self.answers.pop_front().unwrap_or(true)
    }
}

pub fn log(level: LogLevel, text: &str) -> LogEntry {
    LogEntry {
        level,
        log: text.to_string(),
        ..Default::default()
    }
}

pub fn batch(entries: Vec<LogEntry>, offset: i64, last_modified: i64) -> OutputBatch {
    OutputBatch {
        entries,
        offset,
        last_modified,
        exec_state: "running".to_string(),
        ..Default::default()
    }
}

pub fn final_batch(entries: Vec<LogEntry>, offset: i64, exec_state: &str) -> OutputBatch {
    OutputBatch {
        entries,
        offset,
        last_modified: offset,
        completed: true,
        exec_completed: true,
        exec_state: exec_state.to_string(),
        ..Default::default()
    }
}

pub fn status(token: &str, percentage: u32, ready: bool) -> ExportStatus {
    ExportStatus {
        token: token.to_string(),
        ready,
        percentage,
    }
}
