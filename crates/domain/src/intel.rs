//! On-disk intel documents produced by the external indexer.
//!
//! Every map is an [`IndexMap`] so that iteration follows the order the
//! indexer wrote the JSON document in. The summary truncates positionally,
//! so that order is part of the output contract.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Intel directory, relative to the project directory.
pub const INTEL_DIR: &str = ".planning/intel";
/// Required index document inside [`INTEL_DIR`].
pub const INDEX_FILE: &str = "index.json";
/// Optional conventions document inside [`INTEL_DIR`].
pub const CONVENTIONS_FILE: &str = "conventions.json";

/// Literal export name the indexer uses for a module's default export.
pub const DEFAULT_EXPORT: &str = "default";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Index document (index.json)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileIndex {
    /// File path → record, in indexer order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: IndexMap<String, FileRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub exports: Vec<String>,
}

impl FileIndex {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Every export name across every file, in index order, skipping
    /// `excluded`. Duplicates across files are kept.
    pub fn named_exports<'a>(&'a self, excluded: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.files
            .values()
            .flat_map(|record| record.exports.iter())
            .map(String::as_str)
            .filter(move |name| *name != excluded)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Conventions document (conventions.json)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conventions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub naming: NamingConventions,
    #[serde(default, deserialize_with = "null_as_default")]
    pub directories: IndexMap<String, DirectoryInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suffixes: IndexMap<String, SuffixInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingConventions {
    #[serde(default)]
    pub exports: Option<ExportNaming>,
}

/// Dominant export naming style and how prevalent it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportNaming {
    #[serde(default)]
    pub dominant: Option<String>,
    /// Passed through as supplied; never rounded or range-checked.
    #[serde(default, deserialize_with = "present")]
    pub percentage: Option<Value>,
}

impl ExportNaming {
    /// The dominant style, if the indexer detected one.
    pub fn dominant(&self) -> Option<&str> {
        self.dominant.as_deref().filter(|d| !d.is_empty())
    }

    pub fn percentage_display(&self) -> String {
        render_value(self.percentage.as_ref())
    }
}

/// Counts and purposes are rendered as supplied, so they stay untyped:
/// a float or negative count from the indexer must not fail the parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryInfo {
    #[serde(default, deserialize_with = "present")]
    pub purpose: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub files: Option<Value>,
}

impl DirectoryInfo {
    pub fn purpose_display(&self) -> String {
        render_value(self.purpose.as_ref())
    }

    pub fn files_display(&self) -> String {
        render_value(self.files.as_ref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuffixInfo {
    #[serde(default, deserialize_with = "present")]
    pub purpose: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub count: Option<Value>,
}

impl SuffixInfo {
    pub fn purpose_display(&self) -> String {
        render_value(self.purpose.as_ref())
    }

    pub fn count_display(&self) -> String {
        render_value(self.count.as_ref())
    }
}

/// Render a scalar the way a JavaScript template literal would, which is
/// how the indexer's own tooling prints these documents.
///
/// - absent → `undefined`, `null` → `null`
/// - strings unquoted
/// - integral floats without a fraction (`92.0` → `92`, `-0.0` → `0`)
/// - other numbers in shortest round-trip form (`87.5`)
/// - arrays and objects as compact JSON
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => render_number(n),
        Some(other) => other.to_string(),
    }
}

fn render_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

impl Conventions {
    pub fn export_naming(&self) -> Option<&ExportNaming> {
        self.naming.exports.as_ref()
    }
}

// ── serde helpers ───────────────────────────────────────────────────

/// Treat an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep an explicit `null` as `Some(Value::Null)`; only a missing field is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_preserves_document_order() {
        let raw = r#"{"files": {
            "src/z.ts": {"exports": ["z"]},
            "src/a.ts": {"exports": ["a"]},
            "src/m.ts": {"exports": ["m"]}
        }}"#;
        let index: FileIndex = serde_json::from_str(raw).unwrap();
        let keys: Vec<&str> = index.files.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["src/z.ts", "src/a.ts", "src/m.ts"]);
    }

    #[test]
    fn missing_and_null_fields_default_to_empty() {
        let index: FileIndex = serde_json::from_str("{}").unwrap();
        assert!(index.is_empty());

        let index: FileIndex =
            serde_json::from_str(r#"{"files": {"a.ts": {}, "b.ts": {"exports": null}}}"#).unwrap();
        assert_eq!(index.file_count(), 2);
        assert_eq!(index.named_exports(DEFAULT_EXPORT).count(), 0);

        let conventions: Conventions =
            serde_json::from_str(r#"{"naming": null, "directories": null}"#).unwrap();
        assert!(conventions.export_naming().is_none());
        assert!(conventions.directories.is_empty());
        assert!(conventions.suffixes.is_empty());
    }

    #[test]
    fn named_exports_skip_default_but_keep_duplicates() {
        let raw = r#"{"files": {
            "a.ts": {"exports": ["default", "useThing", "helper"]},
            "b.ts": {"exports": ["helper", "default"]}
        }}"#;
        let index: FileIndex = serde_json::from_str(raw).unwrap();
        let names: Vec<&str> = index.named_exports(DEFAULT_EXPORT).collect();
        assert_eq!(names, vec!["useThing", "helper", "helper"]);
    }

    #[test]
    fn percentage_is_rendered_verbatim() {
        let naming: ExportNaming =
            serde_json::from_str(r#"{"dominant": "camelCase", "percentage": 87.5}"#).unwrap();
        assert_eq!(naming.dominant(), Some("camelCase"));
        assert_eq!(naming.percentage_display(), "87.5");

        let naming: ExportNaming =
            serde_json::from_str(r#"{"dominant": "camelCase", "percentage": 250}"#).unwrap();
        assert_eq!(naming.percentage_display(), "250");

        let naming: ExportNaming =
            serde_json::from_str(r#"{"dominant": "PascalCase", "percentage": "60"}"#).unwrap();
        assert_eq!(naming.percentage_display(), "60");
    }

    #[test]
    fn integral_float_percentage_drops_the_fraction() {
        let naming: ExportNaming =
            serde_json::from_str(r#"{"dominant": "camelCase", "percentage": 92.0}"#).unwrap();
        assert_eq!(naming.percentage_display(), "92");
    }

    #[test]
    fn missing_and_null_percentage() {
        let naming: ExportNaming = serde_json::from_str(r#"{"dominant": "camelCase"}"#).unwrap();
        assert_eq!(naming.percentage_display(), "undefined");

        let naming: ExportNaming =
            serde_json::from_str(r#"{"dominant": "camelCase", "percentage": null}"#).unwrap();
        assert_eq!(naming.percentage_display(), "null");
    }

    #[test]
    fn float_and_negative_counts_parse() {
        let conventions: Conventions = serde_json::from_str(
            r#"{
                "directories": {"src": {"purpose": "Code", "files": 2.0}, "tmp": {"purpose": "Scratch", "files": -1}},
                "suffixes": {".ts": {"purpose": "TypeScript", "count": 2.5}}
            }"#,
        )
        .unwrap();
        assert_eq!(conventions.directories["src"].files_display(), "2");
        assert_eq!(conventions.directories["tmp"].files_display(), "-1");
        assert_eq!(conventions.suffixes[".ts"].count_display(), "2.5");
    }

    #[test]
    fn missing_purpose_and_count_render_undefined() {
        let info: SuffixInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info.purpose_display(), "undefined");
        assert_eq!(info.count_display(), "undefined");

        let info: DirectoryInfo =
            serde_json::from_str(r#"{"purpose": 7, "files": -0.0}"#).unwrap();
        assert_eq!(info.purpose_display(), "7");
        assert_eq!(info.files_display(), "0");
    }

    #[test]
    fn empty_dominant_counts_as_absent() {
        let naming: ExportNaming =
            serde_json::from_str(r#"{"dominant": "", "percentage": 10}"#).unwrap();
        assert!(naming.dominant().is_none());
    }
}
