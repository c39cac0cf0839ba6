//! The hook pipeline: trigger filter → intel reader → summary → sink.
//!
//! [`run_guarded`] is the only entry point the binary uses in hook mode.
//! Every error and panic inside it is swallowed, so the assistant's session
//! start can never be blocked or flagged by this process.

use std::fmt;
use std::io::{Read, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use anyhow::Context;

use intel_domain::config::Config;
use intel_domain::trace::TraceEvent;
use intel_summary::{SummaryBuilder, SummaryReport};

use crate::cli;
use crate::reader::IntelReader;
use crate::sink;
use crate::trigger::TriggerFilter;

#[derive(Debug, Clone)]
pub struct HookOptions {
    pub project_dir: PathBuf,
    /// Explicit config file; `None` uses the project default.
    pub config_path: Option<PathBuf>,
}

/// Why the pipeline stopped without output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Trigger,
    NoIndex,
    EmptyIndex,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::Trigger => "trigger_not_allowed",
            SkipReason::NoIndex => "no_index",
            SkipReason::EmptyIndex => "empty_index",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Emitted(SummaryReport),
    Skipped(SkipReason),
    /// Swallowed error or panic.
    Failed,
}

/// Run the pipeline once. Errors propagate; see [`run_guarded`].
pub fn run_hook<R: Read, W: Write>(
    mut input: R,
    output: &mut W,
    options: &HookOptions,
) -> anyhow::Result<Outcome> {
    // The payload may arrive in several chunks; buffer to end-of-input.
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .context("reading hook payload")?;

    // Decided before any file is read, the config included.
    if !TriggerFilter.evaluate(&raw) {
        return Ok(Outcome::Skipped(SkipReason::Trigger));
    }

    let config = load_config_or_default(options);

    let reader = IntelReader::for_project(&options.project_dir);
    let Some(docs) = reader.load()? else {
        return Ok(Outcome::Skipped(SkipReason::NoIndex));
    };

    let builder = SummaryBuilder::new(config.summary.clone());
    let Some((summary, report)) = builder.build(&docs.index, &docs.conventions) else {
        return Ok(Outcome::Skipped(SkipReason::EmptyIndex));
    };

    report.trace_event().emit();
    if report.over_budget() {
        tracing::warn!(
            estimated_tokens = report.estimated_tokens,
            token_budget = report.token_budget,
            "summary exceeds token budget"
        );
    }

    sink::emit(output, &config.output.tag, &summary).context("writing summary")?;

    Ok(Outcome::Emitted(report))
}

/// A broken config file only changes presentation, so fall back to the
/// defaults instead of dropping the summary.
fn load_config_or_default(options: &HookOptions) -> Config {
    match cli::load_config(&options.project_dir, options.config_path.as_deref()) {
        Ok((config, _)) => config,
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "ignoring hook config, using defaults");
            Config::default()
        }
    }
}

/// Run the pipeline behind a single boundary that turns every error and
/// panic into "no output".
pub fn run_guarded<R: Read, W: Write>(input: R, output: &mut W, options: &HookOptions) -> Outcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| run_hook(input, output, options)));

    match result {
        Ok(Ok(outcome)) => {
            if let Outcome::Skipped(reason) = &outcome {
                TraceEvent::SummarySkipped {
                    reason: reason.to_string(),
                }
                .emit();
            }
            outcome
        }
        Ok(Err(e)) => {
            tracing::debug!(error = %format!("{e:#}"), "hook failed, suppressing");
            Outcome::Failed
        }
        Err(_) => {
            tracing::debug!("hook panicked, suppressing");
            Outcome::Failed
        }
    }
}
