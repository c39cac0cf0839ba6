use intel_domain::intel::{DirectoryInfo, ExportNaming, SuffixInfo};

pub const DIRECTORIES_HEADER: &str = "Key directories:";
pub const SUFFIXES_HEADER: &str = "File patterns:";

pub fn format_header(file_count: usize) -> String {
    format!("Indexed files: {file_count}")
}

/// `None` when no dominant style was detected.
pub fn format_naming(naming: &ExportNaming) -> Option<String> {
    let dominant = naming.dominant()?;
    Some(format!(
        "Export naming: {dominant} ({}%)",
        naming.percentage_display()
    ))
}

pub fn format_directory(dir: &str, info: &DirectoryInfo) -> String {
    format!(
        "  {dir}: {} ({} files)",
        info.purpose_display(),
        info.files_display()
    )
}

pub fn format_suffix(suffix: &str, info: &SuffixInfo) -> String {
    format!(
        "  {suffix}: {} ({} files)",
        info.purpose_display(),
        info.count_display()
    )
}

pub fn format_export_total(total: usize) -> String {
    format!("Total exports: {total}")
}

pub fn format_export_list(names: &[&str]) -> String {
    format!("Exports: {}", names.join(", "))
}

/// Wrap the summary in `<tag>` / `</tag>` delimiters. No trailing newline.
pub fn wrap_block(tag: &str, summary: &str) -> String {
    format!("<{tag}>\n{summary}\n</{tag}>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_line_needs_dominant() {
        let naming = ExportNaming {
            dominant: None,
            percentage: Some(serde_json::json!(90)),
        };
        assert!(format_naming(&naming).is_none());

        let naming = ExportNaming {
            dominant: Some("camelCase".into()),
            percentage: Some(serde_json::json!(90)),
        };
        assert_eq!(
            format_naming(&naming).as_deref(),
            Some("Export naming: camelCase (90%)")
        );
    }

    #[test]
    fn suffix_lines_say_files() {
        let info = SuffixInfo {
            purpose: Some(serde_json::json!("React hooks")),
            count: Some(serde_json::json!(4)),
        };
        assert_eq!(format_suffix(".hook.ts", &info), "  .hook.ts: React hooks (4 files)");
    }

    #[test]
    fn directory_counts_render_as_supplied() {
        let info: DirectoryInfo =
            serde_json::from_str(r#"{"purpose": "Code", "files": 2.0}"#).unwrap();
        assert_eq!(format_directory("src", &info), "  src: Code (2 files)");

        let info: DirectoryInfo =
            serde_json::from_str(r#"{"purpose": "Scratch", "files": -3}"#).unwrap();
        assert_eq!(format_directory("tmp", &info), "  tmp: Scratch (-3 files)");
    }

    #[test]
    fn block_has_no_trailing_newline() {
        let block = wrap_block("codebase-intelligence", "Indexed files: 1");
        assert_eq!(
            block,
            "<codebase-intelligence>\nIndexed files: 1\n</codebase-intelligence>"
        );
    }
}
