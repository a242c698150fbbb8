//! # Metadata Type Registry
//!
//! The registry is the set of names a deployment directory may normalize to.
//! Its source of truth is `metadata/types/`, which holds one
//! `<TypeName>.json` descriptor per metadata type (produced by
//! `sfmeta split`). When that directory is absent the registry falls back to
//! a fixed list of common source-tree directory names so a fresh checkout
//! can still be validated.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::RegistryError;

/// Descriptor file suffix inside the types directory.
pub const DESCRIPTOR_SUFFIX: &str = ".json";

/// Directory names accepted when no types directory is available.
pub const FALLBACK_TYPES: [&str; 20] = [
    "aura",
    "lwc",
    "classes",
    "objects",
    "layouts",
    "tabs",
    "permissionsets",
    "profiles",
    "staticresources",
    "triggers",
    "pages",
    "components",
    "applications",
    "flows",
    "contentassets",
    "flexipages",
    "labels",
    "externalCredentials",
    "namedCredentials",
    "remoteSiteSettings",
];

/// Where a registry's names came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    /// Descriptor file stems from an existing types directory.
    Directory(PathBuf),
    /// The built-in [`FALLBACK_TYPES`]; the named directory did not exist.
    Fallback {
        /// Types directory that was looked for.
        missing: PathBuf,
    },
    /// Names supplied directly by the caller.
    Explicit,
}

/// Set of recognized metadata type names.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    names: HashSet<String>,
    source: RegistrySource,
}

impl TypeRegistry {
    /// Load the registry from a types directory.
    ///
    /// Every regular entry whose file name ends in `.json` contributes its
    /// stem. A missing directory yields the fallback registry; an empty one
    /// yields an empty registry.
    pub fn load(types_dir: &Path) -> Result<Self, RegistryError> {
        if !types_dir.exists() {
            tracing::warn!(
                dir = %types_dir.display(),
                "metadata types directory not found; using fallback list"
            );
            return Ok(Self {
                names: FALLBACK_TYPES.iter().map(|s| s.to_string()).collect(),
                source: RegistrySource::Fallback {
                    missing: types_dir.to_path_buf(),
                },
            });
        }

        let read_err = |source| RegistryError::ReadDir {
            path: types_dir.to_path_buf(),
            source,
        };

        let mut names = HashSet::new();
        for entry in std::fs::read_dir(types_dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                tracing::warn!(
                    entry = ?entry.path(),
                    "skipping descriptor with non-UTF-8 file name"
                );
                continue;
            };
            if let Some(stem) = file_name.strip_suffix(DESCRIPTOR_SUFFIX) {
                names.insert(stem.to_string());
            }
        }

        tracing::debug!(
            dir = %types_dir.display(),
            count = names.len(),
            "loaded metadata type registry"
        );

        Ok(Self {
            names,
            source: RegistrySource::Directory(types_dir.to_path_buf()),
        })
    }

    /// Registry over an explicit set of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            source: RegistrySource::Explicit,
        }
    }

    /// Whether `name` is a recognized type: exact match first, then a
    /// case-insensitive comparison against every entry.
    pub fn contains(&self, name: &str) -> bool {
        if self.names.contains(name) {
            return true;
        }
        let lowered = name.to_lowercase();
        self.names.iter().any(|known| known.to_lowercase() == lowered)
    }

    /// Whether `name` is present with exactly this spelling.
    pub fn contains_exact(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of names in the registry.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry has no names at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn source(&self) -> &RegistrySource {
        &self.source
    }

    /// Whether the built-in fallback list is in use.
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, RegistrySource::Fallback { .. })
    }

    /// Names in lexicographic order, for display.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
