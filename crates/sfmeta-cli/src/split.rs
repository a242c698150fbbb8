//! # Split Subcommand
//!
//! Splits the metadata coverage document into one descriptor file per type.
//! The resulting `metadata/types/` directory is the registry read by
//! `sfmeta validate`.
//!
//! Failures (missing input, invalid JSON, no `types` key, IO errors) are
//! reported as `Error: <message>` and exit 1. Files written before a failure
//! are kept. With `--json` the summary (or `{"error": ...}`) is printed as a
//! JSON object instead.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use sfmeta_core::{split_document, CoverageDocument, CoverageError, SplitSummary};

/// Coverage document relative to the repository root.
pub const DEFAULT_INPUT: &str = "metadata/metadata-coverage.json";

/// Output directory relative to the repository root.
pub const DEFAULT_OUTPUT_DIR: &str = "metadata/types";

/// Arguments for the `sfmeta split` subcommand.
#[derive(Args, Debug, Default)]
pub struct SplitArgs {
    /// Coverage document to split [default: metadata/metadata-coverage.json].
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory receiving one `<Type>.json` per entry [default: metadata/types].
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print the extracted files as JSON instead of progress lines.
    #[arg(long)]
    pub json: bool,
}

/// Execute the split subcommand, writing progress to stdout.
///
/// Returns exit code: 0 on success, 1 on any failure.
pub fn run_split(args: &SplitArgs, repo_root: &Path) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    split_with(args, repo_root, &mut out)
}

/// Execute the split subcommand with an explicit output sink.
pub fn split_with(args: &SplitArgs, repo_root: &Path, out: &mut dyn Write) -> Result<u8> {
    let input = crate::resolve_path(
        args.input.as_deref().unwrap_or(Path::new(DEFAULT_INPUT)),
        repo_root,
    );
    let out_dir = crate::resolve_path(
        args.out_dir.as_deref().unwrap_or(Path::new(DEFAULT_OUTPUT_DIR)),
        repo_root,
    );

    if args.json {
        return split_json(&input, &out_dir, out);
    }

    writeln!(out, "Extracting metadata types from {}...", input.display())?;

    match extract(&input, &out_dir, Some(&mut *out))? {
        Ok(summary) => {
            writeln!(
                out,
                "Done! {} metadata types extracted to {}/",
                summary.count(),
                summary.output_dir.display()
            )?;
            Ok(0)
        }
        Err(e) => {
            tracing::error!(input = %input.display(), error = %e, "coverage split failed");
            writeln!(out, "Error: {e}")?;
            Ok(1)
        }
    }
}

fn split_json(input: &Path, out_dir: &Path, out: &mut dyn Write) -> Result<u8> {
    match extract(input, out_dir, None)? {
        Ok(summary) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            Ok(0)
        }
        Err(e) => {
            tracing::error!(input = %input.display(), error = %e, "coverage split failed");
            let failure = serde_json::json!({ "error": e.to_string() });
            writeln!(out, "{}", serde_json::to_string_pretty(&failure)?)?;
            Ok(1)
        }
    }
}

/// Load and split the document, printing a line per type to `progress`.
/// The outer result carries console write failures; the inner one carries
/// the user-facing split outcome.
fn extract(
    input: &Path,
    out_dir: &Path,
    mut progress: Option<&mut dyn Write>,
) -> Result<Result<SplitSummary, CoverageError>> {
    let document = match CoverageDocument::load(input) {
        Ok(document) => document,
        Err(e) => return Ok(Err(e)),
    };
    tracing::info!(types = document.len(), "loaded coverage document");

    let mut console = Ok(());
    let result = split_document(&document, out_dir, |entry| {
        if let (Some(out), true) = (progress.as_mut(), console.is_ok()) {
            console = writeln!(out, "Extracted {}", entry.key);
        }
    });
    console?;
    Ok(result)
}
