//! Data Transfer Objects
//!
//! Response envelopes that wrap domain types together with listing metadata.

pub mod execution;
