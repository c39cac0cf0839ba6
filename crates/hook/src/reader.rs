use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use intel_domain::intel::{Conventions, FileIndex, CONVENTIONS_FILE, INDEX_FILE, INTEL_DIR};
use intel_domain::trace::TraceEvent;
use intel_domain::{Error, Result};

/// Both intel documents, parsed.
#[derive(Debug, Clone)]
pub struct IntelDocuments {
    pub index: FileIndex,
    pub conventions: Conventions,
}

/// Reads JSON documents from the intel directory.
///
/// A required document that is missing yields `Ok(None)`; an optional one
/// falls back to its `Default`. A document that exists but does not parse
/// is always an error.
pub struct IntelReader {
    root: PathBuf,
}

impl IntelReader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Reader for `<project_dir>/.planning/intel`.
    pub fn for_project(project_dir: &Path) -> Self {
        Self::new(project_dir.join(INTEL_DIR))
    }

    pub fn read_required<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let Some(raw) = self.read_raw(name)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| Error::Document {
                name: name.to_string(),
                source,
            })
    }

    pub fn read_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        Ok(self.read_required(name)?.unwrap_or_default())
    }

    /// Load the index (required) and conventions (optional).
    ///
    /// `Ok(None)` means there is no index yet, which is the normal state for
    /// a project that was never indexed.
    pub fn load(&self) -> Result<Option<IntelDocuments>> {
        let Some(index) = self.read_required::<FileIndex>(INDEX_FILE)? else {
            return Ok(None);
        };
        let conventions = self.read_or_default::<Conventions>(CONVENTIONS_FILE)?;
        Ok(Some(IntelDocuments { index, conventions }))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_raw(&self, name: &str) -> Result<Option<String>> {
        let path = self.root.join(name);

        if !path.exists() {
            TraceEvent::IntelFileRead {
                filename: name.to_string(),
                bytes: 0,
                present: false,
            }
            .emit();
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;

        TraceEvent::IntelFileRead {
            filename: name.to_string(),
            bytes: content.len(),
            present: true,
        }
        .emit();

        Ok(Some(content))
    }
}
