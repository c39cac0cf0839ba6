use serde::Serialize;

/// Structured trace events emitted across all intel crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    TriggerEvaluated {
        source: Option<String>,
        proceed: bool,
    },
    IntelFileRead {
        filename: String,
        bytes: usize,
        present: bool,
    },
    SummaryBuilt {
        files_indexed: usize,
        naming_included: bool,
        directories_shown: usize,
        directories_total: usize,
        suffixes_shown: usize,
        suffixes_total: usize,
        exports_total: usize,
        exports_listed: usize,
        output_chars: usize,
        estimated_tokens: usize,
        over_budget: bool,
    },
    SummarySkipped {
        reason: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "intel_event");
    }
}
