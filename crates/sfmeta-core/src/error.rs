//! # Error Types
//!
//! One `thiserror` enum per component. The CLI wraps these in `anyhow`
//! context, except for [`CoverageError`], whose variants are reported to the
//! user verbatim as `Error: <message>`.

use std::path::PathBuf;

use thiserror::Error;

/// Error loading the metadata type registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The types directory exists but could not be listed.
    #[error("failed to read metadata types directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that was being listed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Error scanning the deployment source tree.
#[derive(Error, Debug)]
pub enum StructureError {
    /// The deployment directory exists but could not be listed.
    #[error("failed to read deployment directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that was being listed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Error writing GitHub Actions step outputs.
#[derive(Error, Debug)]
pub enum CiOutputError {
    /// The `GITHUB_OUTPUT` file could not be opened or appended to.
    #[error("failed to write CI outputs to {}: {source}", path.display())]
    Write {
        /// Output file path taken from the environment.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Writing to the discard sink failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error splitting a metadata coverage document.
#[derive(Error, Debug)]
pub enum CoverageError {
    /// The input document does not exist.
    #[error("File not found: {}", path.display())]
    NotFound {
        /// Path that was expected to hold the coverage document.
        path: PathBuf,
    },

    /// The input is not valid JSON.
    #[error("Invalid JSON file ({0})")]
    InvalidJson(#[source] serde_json::Error),

    /// The document has no top-level `types` key.
    #[error("No 'types' key found in the JSON file")]
    MissingTypes,

    /// The `types` value is present but is not a JSON object.
    #[error("'types' must be a JSON object, found {found}")]
    TypesNotObject {
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// Reading the input or writing an output file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File or directory involved in the failed operation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A type descriptor could not be rendered back to JSON text.
    #[error("failed to render descriptor for '{key}': {source}")]
    Render {
        /// Coverage key of the descriptor.
        key: String,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_errors_use_user_facing_messages() {
        let missing = CoverageError::NotFound {
            path: PathBuf::from("metadata/metadata-coverage.json"),
        };
        assert_eq!(
            missing.to_string(),
            "File not found: metadata/metadata-coverage.json"
        );
        assert_eq!(
            CoverageError::MissingTypes.to_string(),
            "No 'types' key found in the JSON file"
        );
    }

    #[test]
    fn invalid_json_message_mentions_invalid_json() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let msg = CoverageError::InvalidJson(err).to_string();
        assert!(msg.starts_with("Invalid JSON file"), "got: {msg}");
    }

    #[test]
    fn registry_error_includes_path() {
        let err = RegistryError::ReadDir {
            path: PathBuf::from("/repo/metadata/types"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/repo/metadata/types"));
        assert!(msg.contains("denied"));
    }
}
