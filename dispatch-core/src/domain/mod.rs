//! Core domain types
//!
//! These types mirror the JSON documents returned by the orchestration
//! server's REST API. They carry no transport logic; the client crate
//! fetches them and the polling engine consumes them.

pub mod execution;
pub mod export;
pub mod output;
pub mod paging;
