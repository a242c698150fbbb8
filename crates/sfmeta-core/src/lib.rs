//! # sfmeta-core — Salesforce Metadata Structure Rules
//!
//! Library half of the `sfmeta` tooling. Everything here is pure logic over
//! the file system and JSON; console styling and exit codes live in
//! `sfmeta-cli`.
//!
//! ## Modules
//!
//! - [`registry`] — the set of recognized metadata type names, loaded from
//!   `metadata/types/*.json` or a built-in fallback list.
//! - [`normalize`] — maps source-tree directory names (`classes`,
//!   `triggers`, ...) to canonical metadata API names (`ApexClass`, ...).
//! - [`structure`] — classifies the top-level directories of a deployment
//!   path against a registry and aggregates a [`StructureReport`].
//! - [`ci_output`] — GitHub Actions step outputs for a report.
//! - [`coverage`] — splits a metadata coverage document into one JSON file
//!   per type. Its output directory is the registry's input.
//! - [`json_text`] — JSON text rendering compatible with the existing CI
//!   consumers (ASCII-only escapes, `", "` array separators).
//!
//! ## Crate Policy
//!
//! - No `.unwrap()` outside tests.
//! - Lookup tables are `static` data; nothing in this crate mutates global
//!   state.
//! - All fallible operations return the typed errors in [`error`].

pub mod ci_output;
pub mod coverage;
pub mod error;
pub mod json_text;
pub mod normalize;
pub mod registry;
pub mod structure;

pub use ci_output::CiEnvironment;
pub use coverage::{sanitize_type_key, split_document, CoverageDocument, ExtractedType, SplitSummary};
pub use error::{CiOutputError, CoverageError, RegistryError, StructureError};
pub use normalize::normalize_directory_name;
pub use registry::{RegistrySource, TypeRegistry, FALLBACK_TYPES};
pub use structure::{classify, scan_deployment, Classification, StructureReport, Verdict};
