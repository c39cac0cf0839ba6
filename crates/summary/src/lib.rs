//! Deterministic codebase summary for session-start context injection.
//!
//! [`SummaryBuilder::build`] is a pure function of the index and
//! conventions documents. Every section is bounded by a positional cap,
//! so the output stays a handful of lines however large the project is.

pub mod builder;
pub mod injection;
pub mod report;
pub mod truncation;

pub use builder::SummaryBuilder;
pub use report::SummaryReport;
