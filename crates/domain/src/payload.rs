/// Session sources that authorize a summary. Matched exactly.
pub const TRIGGER_SOURCES: [&str; 2] = ["startup", "resume"];

/// Hook invocation payload delivered on stdin by the assistant.
///
/// Only `source` matters here; every other field is ignored.
#[derive(Debug, Clone, Default)]
pub struct InvocationPayload {
    /// Why the session started (e.g. `"startup"`, `"resume"`, `"clear"`).
    pub source: Option<String>,
}

impl InvocationPayload {
    /// Parse a fully buffered payload.
    ///
    /// A non-string `source` is treated as missing rather than an error.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let source = value
            .get("source")
            .and_then(|s| s.as_str())
            .map(str::to_string);
        Ok(Self { source })
    }

    /// Whether the session source is one of [`TRIGGER_SOURCES`].
    pub fn is_trigger(&self) -> bool {
        self.source
            .as_deref()
            .is_some_and(|source| TRIGGER_SOURCES.contains(&source))
    }
}
