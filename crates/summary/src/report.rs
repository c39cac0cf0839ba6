use intel_domain::trace::TraceEvent;
use serde::{Deserialize, Serialize};

/// Rough chars-per-token ratio used for the budget estimate.
pub const CHARS_PER_TOKEN: usize = 4;

/// Machine-readable report of one summary build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub files_indexed: usize,
    pub naming_included: bool,
    pub directories_shown: usize,
    pub directories_total: usize,
    pub suffixes_shown: usize,
    pub suffixes_total: usize,
    pub exports_total: usize,
    /// Zero when the total is above the listing cap.
    pub exports_listed: usize,
    pub output_chars: usize,
    pub estimated_tokens: usize,
    pub token_budget: usize,
}

impl SummaryReport {
    pub fn over_budget(&self) -> bool {
        self.estimated_tokens > self.token_budget
    }

    pub fn trace_event(&self) -> TraceEvent {
        TraceEvent::SummaryBuilt {
            files_indexed: self.files_indexed,
            naming_included: self.naming_included,
            directories_shown: self.directories_shown,
            directories_total: self.directories_total,
            suffixes_shown: self.suffixes_shown,
            suffixes_total: self.suffixes_total,
            exports_total: self.exports_total,
            exports_listed: self.exports_listed,
            output_chars: self.output_chars,
            estimated_tokens: self.estimated_tokens,
            over_budget: self.over_budget(),
        }
    }
}

/// Token estimate for `text`, rounded up.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}
