//! Dispatch Core
//!
//! Wire and domain types shared by the Dispatch client and CLI.
//!
//! This crate contains:
//! - Domain types: executions, console output batches, export jobs, paging
//! - DTOs: response envelopes returned by the orchestration server

pub mod domain;
pub mod dto;
