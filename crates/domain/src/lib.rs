//! Shared types for the codebase-intelligence session hook: the on-disk
//! intel documents, the hook invocation payload, configuration, errors and
//! structured trace events.

pub mod config;
pub mod error;
pub mod intel;
pub mod payload;
pub mod trace;

pub use error::{Error, Result};
