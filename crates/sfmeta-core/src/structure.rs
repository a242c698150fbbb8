//! # Deployment Structure Classification
//!
//! Every immediate subdirectory of the deployment path
//! (`force-app/main/default`) must correspond to a metadata type. A
//! directory is valid when its normalized name is in the registry, by exact
//! match or case-insensitively. Plain files at that level are ignored.
//!
//! Listing order is whatever the file system returns; it is preserved in the
//! report and is not sorted.

use std::path::Path;

use serde::Serialize;

use crate::error::StructureError;
use crate::normalize::normalize_directory_name;
use crate::registry::TypeRegistry;

/// Outcome for a single directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    Invalid,
}

/// Classification of one deployment directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Directory name as found on disk.
    pub name: String,
    /// Name after alias normalization.
    pub normalized: String,
    pub verdict: Verdict,
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }
}

/// Classify a directory name against a registry.
pub fn classify(name: &str, registry: &TypeRegistry) -> Classification {
    let normalized = normalize_directory_name(name);
    let verdict = if registry.contains(normalized) {
        Verdict::Valid
    } else {
        Verdict::Invalid
    };
    Classification {
        name: name.to_string(),
        normalized: normalized.to_string(),
        verdict,
    }
}

/// Names of the immediate subdirectories of `deploy_dir`, in listing order.
///
/// Entries whose type cannot be determined are logged and skipped.
pub fn list_deployment_dirs(deploy_dir: &Path) -> Result<Vec<String>, StructureError> {
    let read_err = |source| StructureError::ReadDir {
        path: deploy_dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(deploy_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        // Follow symlinks, as a directory check on the path would.
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {
                dirs.push(entry.file_name().to_string_lossy().into_owned());
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(entry = %path.display(), error = %e, "skipping unreadable entry");
            }
        }
    }
    Ok(dirs)
}

/// Classify every subdirectory of `deploy_dir`, in listing order.
pub fn scan_deployment(
    deploy_dir: &Path,
    registry: &TypeRegistry,
) -> Result<Vec<Classification>, StructureError> {
    let dirs = list_deployment_dirs(deploy_dir)?;
    tracing::debug!(
        dir = %deploy_dir.display(),
        count = dirs.len(),
        "scanning deployment directories"
    );
    Ok(dirs.iter().map(|name| classify(name, registry)).collect())
}

/// Aggregated result of a structure validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    pub valid_dirs: Vec<String>,
    pub invalid_dirs: Vec<String>,
}

impl StructureReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one classification to the matching list.
    pub fn record(&mut self, classification: &Classification) {
        let name = classification.name.clone();
        match classification.verdict {
            Verdict::Valid => self.valid_dirs.push(name),
            Verdict::Invalid => self.invalid_dirs.push(name),
        }
    }

    /// Total number of directories checked.
    pub fn total(&self) -> usize {
        self.valid_dirs.len() + self.invalid_dirs.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.invalid_dirs.is_empty()
    }

    pub fn passed(&self) -> bool {
        !self.has_errors()
    }
}

impl<'a> FromIterator<&'a Classification> for StructureReport {
    fn from_iter<T: IntoIterator<Item = &'a Classification>>(iter: T) -> Self {
        let mut report = Self::new();
        for classification in iter {
            report.record(classification);
        }
        report
    }
}
