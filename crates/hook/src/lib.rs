//! Session-start hook: reads `.planning/intel` and prints a bounded
//! codebase summary for the assistant's context window.

pub mod cli;
pub mod pipeline;
pub mod reader;
pub mod sink;
pub mod trigger;
