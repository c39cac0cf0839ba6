use intel_domain::payload::InvocationPayload;
use intel_domain::trace::TraceEvent;

/// Decides from the invocation payload whether a summary should be built.
///
/// Only [`intel_domain::payload::TRIGGER_SOURCES`] proceed. The check runs
/// before any file is touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerFilter;

impl TriggerFilter {
    /// Evaluate a raw, fully buffered payload. Never fails: a payload that
    /// does not parse simply does not proceed.
    pub fn evaluate(&self, raw: &str) -> bool {
        let payload = match InvocationPayload::parse(raw) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(error = %e, "unparseable hook payload");
                InvocationPayload::default()
            }
        };

        let proceed = payload.is_trigger();
        TraceEvent::TriggerEvaluated {
            source: payload.source,
            proceed,
        }
        .emit();
        proceed
    }
}
