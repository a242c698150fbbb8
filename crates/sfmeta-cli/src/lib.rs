//! # sfmeta-cli — CLI Tool for Salesforce Metadata Repositories
//!
//! Provides the `sfmeta` command-line interface.
//!
//! ## Subcommands
//!
//! - `sfmeta validate` — check that every directory under
//!   `force-app/main/default` is a recognized metadata type. Exits 1 when
//!   any directory is not; publishes GitHub Actions step outputs when run
//!   in a workflow.
//! - `sfmeta split` — split `metadata/metadata-coverage.json` into one
//!   descriptor per type under `metadata/types/`, the registry the validator
//!   reads.
//!
//! Both commands run with no arguments from anywhere inside the repository:
//!
//! ```bash
//! sfmeta split
//! sfmeta validate
//! ```

pub mod split;
pub mod style;
pub mod validate;

use std::path::{Path, PathBuf};

/// Directories whose presence marks a metadata repository root.
pub const REPO_MARKERS: [&str; 2] = ["force-app", "metadata"];

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is; relative paths are joined onto
/// `repo_root`.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root.join(path)
    }
}

/// Walk up from `start` to the first directory containing any of
/// [`REPO_MARKERS`].
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| REPO_MARKERS.iter().any(|marker| dir.join(marker).is_dir()))
        .map(Path::to_path_buf)
}
