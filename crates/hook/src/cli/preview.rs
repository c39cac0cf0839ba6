use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use intel_domain::config::Config;
use intel_domain::intel::INDEX_FILE;
use intel_summary::{SummaryBuilder, SummaryReport};

use crate::reader::IntelReader;

#[derive(Serialize)]
struct PreviewOutput<'a> {
    summary: &'a str,
    report: &'a SummaryReport,
}

/// Build and print the summary without the trigger filter or the
/// always-succeed boundary, so problems surface as errors.
pub fn run(config: &Config, project_dir: &Path, json: bool) -> anyhow::Result<()> {
    let reader = IntelReader::for_project(project_dir);
    let docs = reader
        .load()
        .with_context(|| format!("reading intel from {}", reader.root().display()))?
        .with_context(|| format!("no {INDEX_FILE} in {}", reader.root().display()))?;

    let builder = SummaryBuilder::new(config.summary.clone());
    let Some((summary, report)) = builder.build(&docs.index, &docs.conventions) else {
        eprintln!("index has no files; the hook would print nothing");
        return Ok(());
    };

    if json {
        let output = PreviewOutput {
            summary: &summary,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{summary}");
        eprintln!(
            "\n~{} tokens (budget {}), {} chars",
            report.estimated_tokens, report.token_budget, report.output_chars
        );
    }

    Ok(())
}
