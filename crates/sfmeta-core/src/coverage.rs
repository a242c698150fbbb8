//! # Coverage Document Splitting
//!
//! `metadata/metadata-coverage.json` describes every metadata type the
//! platform knows about under a single top-level `types` object:
//!
//! ```json
//! { "types": { "ApexClass": { ... }, "Layout/x": { ... } } }
//! ```
//!
//! Splitting writes each descriptor to `<output>/<sanitized key>.json`, which
//! is the layout [`TypeRegistry::load`](crate::registry::TypeRegistry::load)
//! reads. Entries are written in document order. There is no atomicity
//! across entries: a failure leaves the files already written in place, and
//! the output directory is never cleared.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoverageError;
use crate::json_text;

/// Top-level key holding the per-type descriptors.
pub const TYPES_KEY: &str = "types";

/// Replace path separators and spaces in a coverage key with `_`.
///
/// ```
/// use sfmeta_core::sanitize_type_key;
///
/// assert_eq!(sanitize_type_key("Layout/x"), "Layout_x");
/// assert_eq!(sanitize_type_key(r"a\b c"), "a_b_c");
/// ```
pub fn sanitize_type_key(key: &str) -> String {
    key.replace(['/', '\\', ' '], "_")
}

/// Parsed coverage document, reduced to its `types` mapping.
#[derive(Debug, Clone)]
pub struct CoverageDocument {
    types: Map<String, Value>,
}

impl CoverageDocument {
    /// Read and parse a coverage document from disk.
    pub fn load(path: &Path) -> Result<Self, CoverageError> {
        if !path.is_file() {
            return Err(CoverageError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| CoverageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse a coverage document from JSON text.
    pub fn parse(text: &str) -> Result<Self, CoverageError> {
        let document: Value = serde_json::from_str(text).map_err(CoverageError::InvalidJson)?;
        Self::from_value(document)
    }

    /// Extract the `types` mapping from an already-parsed document.
    pub fn from_value(document: Value) -> Result<Self, CoverageError> {
        let Value::Object(mut root) = document else {
            return Err(CoverageError::MissingTypes);
        };
        match root.remove(TYPES_KEY) {
            None => Err(CoverageError::MissingTypes),
            Some(Value::Object(types)) => Ok(Self { types }),
            Some(other) => Err(CoverageError::TypesNotObject {
                found: json_kind(&other),
            }),
        }
    }

    /// The `types` mapping, in document order.
    pub fn types(&self) -> &Map<String, Value> {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One descriptor written by [`split_document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedType {
    /// Key as it appears in the coverage document.
    pub key: String,
    /// File the descriptor was written to.
    pub path: PathBuf,
}

/// Result of a completed split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub output_dir: PathBuf,
    pub extracted: Vec<ExtractedType>,
}

impl SplitSummary {
    pub fn count(&self) -> usize {
        self.extracted.len()
    }
}

/// Write every descriptor of `document` into `output_dir`.
///
/// The directory is created if needed. Existing files with the same name
/// are overwritten; other files are left alone. Keys that sanitize to the
/// same file name overwrite each other in document order. `on_extract` is
/// called after each file is written.
pub fn split_document(
    document: &CoverageDocument,
    output_dir: &Path,
    mut on_extract: impl FnMut(&ExtractedType),
) -> Result<SplitSummary, CoverageError> {
    std::fs::create_dir_all(output_dir).map_err(|source| CoverageError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut extracted = Vec::with_capacity(document.len());
    for (key, descriptor) in document.types() {
        let path = output_dir.join(format!("{}.json", sanitize_type_key(key)));
        let text = json_text::pretty(descriptor).map_err(|source| CoverageError::Render {
            key: key.clone(),
            source,
        })?;
        std::fs::write(&path, text).map_err(|source| CoverageError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(key = %key, path = %path.display(), "extracted metadata type");

        let entry = ExtractedType {
            key: key.clone(),
            path,
        };
        on_extract(&entry);
        extracted.push(entry);
    }

    Ok(SplitSummary {
        output_dir: output_dir.to_path_buf(),
        extracted,
    })
}
