use intel_domain::config::SummaryConfig;
use intel_domain::intel::{Conventions, FileIndex, DEFAULT_EXPORT};

use crate::injection;
use crate::report::{self, SummaryReport};
use crate::truncation;

/// Deterministic summary builder.
///
/// Pure function: accepts already-parsed intel documents and the caps,
/// returns the summary text + machine-readable report. No sorting, scoring
/// or ranking happens anywhere; every cap keeps the first N entries in
/// document order.
#[derive(Debug, Clone, Default)]
pub struct SummaryBuilder {
    pub limits: SummaryConfig,
}

impl SummaryBuilder {
    pub fn new(limits: SummaryConfig) -> Self {
        Self { limits }
    }

    /// Build the summary.
    ///
    /// Returns `None` when the index has no files; that is the only case
    /// that produces nothing.
    pub fn build(
        &self,
        index: &FileIndex,
        conventions: &Conventions,
    ) -> Option<(String, SummaryReport)> {
        let file_count = index.file_count();
        if file_count == 0 {
            tracing::debug!("index has no files, nothing to summarize");
            return None;
        }

        let mut lines: Vec<String> = vec![injection::format_header(file_count)];

        let naming_line = conventions.export_naming().and_then(injection::format_naming);
        let naming_included = naming_line.is_some();
        lines.extend(naming_line);

        let directories = truncation::take_leading(&conventions.directories, self.limits.max_directories);
        if !directories.is_empty() {
            lines.push(String::new());
            lines.push(injection::DIRECTORIES_HEADER.to_string());
            for (dir, info) in &directories.entries {
                lines.push(injection::format_directory(dir, info));
            }
        }

        let suffixes = truncation::take_leading(&conventions.suffixes, self.limits.max_suffixes);
        if !suffixes.is_empty() {
            lines.push(String::new());
            lines.push(injection::SUFFIXES_HEADER.to_string());
            for (suffix, info) in &suffixes.entries {
                lines.push(injection::format_suffix(suffix, info));
            }
        }

        let exports = truncation::export_overview(
            index.named_exports(DEFAULT_EXPORT),
            self.limits.max_listed_exports,
        );
        if exports.total() > 0 {
            lines.push(String::new());
            lines.push(injection::format_export_total(exports.total()));
            if exports.listed {
                lines.push(injection::format_export_list(&exports.names));
            }
        }

        let summary = lines.join("\n");

        let report = SummaryReport {
            files_indexed: file_count,
            naming_included,
            directories_shown: directories.shown(),
            directories_total: directories.total,
            suffixes_shown: suffixes.shown(),
            suffixes_total: suffixes.total,
            exports_total: exports.total(),
            exports_listed: exports.listed_count(),
            output_chars: summary.chars().count(),
            estimated_tokens: report::estimate_tokens(&summary),
            token_budget: self.limits.token_budget,
        };

        Some((summary, report))
    }
}
