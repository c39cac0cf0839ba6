use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Summary caps
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Positional caps applied by the summary generator.
///
/// Sections keep the first N entries in document order; nothing is ranked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "d_5")]
    pub max_directories: usize,
    #[serde(default = "d_3")]
    pub max_suffixes: usize,
    /// Export names are listed only when the total is at most this.
    #[serde(default = "d_10")]
    pub max_listed_exports: usize,
    /// Soft budget; exceeding it only logs a warning.
    #[serde(default = "d_500")]
    pub token_budget: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_directories: 5,
            max_suffixes: 3,
            max_listed_exports: 10,
            token_budget: 500,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Output
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Tag name wrapped around the summary, without angle brackets.
    #[serde(default = "d_tag")]
    pub tag: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { tag: d_tag() }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_5() -> usize {
    5
}
fn d_3() -> usize {
    3
}
fn d_10() -> usize {
    10
}
fn d_500() -> usize {
    500
}
fn d_tag() -> String {
    "codebase-intelligence".into()
}
