//! Execution listing DTOs

use serde::{Deserialize, Serialize};

use crate::domain::execution::Execution;
use crate::domain::paging::Paging;

/// One page of executions for a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionList {
    pub paging: Paging,
    #[serde(default)]
    pub executions: Vec<Execution>,
}
