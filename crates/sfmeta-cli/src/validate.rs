//! # Validate Subcommand
//!
//! Checks that every top-level directory under the deployment path names a
//! recognized metadata type.
//!
//! ```text
//! Validating force-app metadata structure...
//! Checking directories in /repo/force-app/main/default...
//! ✓ classes - Valid metadata type
//! ✗ UnknownType - Invalid metadata type
//!
//! === Validation Summary ===
//! ...
//! ```
//!
//! Exit code is 1 when any directory is invalid, 0 otherwise. A missing
//! deployment path counts as success.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use sfmeta_core::ci_output::{self, CiEnvironment};
use sfmeta_core::normalize;
use sfmeta_core::{scan_deployment, RegistrySource, StructureReport, TypeRegistry, Verdict};

use crate::style::Palette;

/// Registry location relative to the repository root.
pub const DEFAULT_TYPES_DIR: &str = "metadata/types";

/// Deployment path relative to the repository root.
pub const DEFAULT_DEPLOY_DIR: &str = "force-app/main/default";

/// Arguments for the `sfmeta validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Directory of `<Type>.json` descriptors [default: metadata/types].
    #[arg(long, value_name = "DIR")]
    pub types_dir: Option<PathBuf>,

    /// Deployment source directory [default: force-app/main/default].
    #[arg(long, value_name = "DIR")]
    pub deploy_dir: Option<PathBuf>,

    /// Print the directory alias table and exit.
    #[arg(long)]
    pub list_aliases: bool,

    /// Print the result as JSON instead of the colored report.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand against stdout and the process
/// environment.
///
/// Returns exit code: 0 on success, 1 when invalid directories were found.
pub fn run_validate(args: &ValidateArgs, repo_root: &Path, palette: Palette) -> Result<u8> {
    let ci = CiEnvironment::from_env();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    validate_with(args, repo_root, palette, &ci, &mut out)
}

/// Execute the validate subcommand with explicit CI context and output sink.
pub fn validate_with(
    args: &ValidateArgs,
    repo_root: &Path,
    palette: Palette,
    ci: &CiEnvironment,
    out: &mut dyn Write,
) -> Result<u8> {
    if args.list_aliases {
        for (alias, canonical) in normalize::aliases() {
            writeln!(out, "{alias} -> {canonical}")?;
        }
        return Ok(0);
    }

    let types_dir = crate::resolve_path(
        args.types_dir.as_deref().unwrap_or(Path::new(DEFAULT_TYPES_DIR)),
        repo_root,
    );
    let deploy_dir = crate::resolve_path(
        args.deploy_dir.as_deref().unwrap_or(Path::new(DEFAULT_DEPLOY_DIR)),
        repo_root,
    );

    if args.json {
        return validate_json(&types_dir, &deploy_dir, ci, out);
    }

    writeln!(out, "Validating force-app metadata structure...")?;

    let registry = TypeRegistry::load(&types_dir).context("failed to load metadata types")?;
    if registry.is_fallback() {
        let line = format!(
            "Warning: metadata/types directory not found at {}. Using fallback list.",
            types_dir.display()
        );
        writeln!(out, "{}", palette.warning(&line))?;
    }

    let report = match check_structure(&registry, &deploy_dir, palette, out)? {
        Some(report) => report,
        None => {
            // Nothing to validate.
            print_banner(true, palette, out)?;
            return Ok(0);
        }
    };

    publish_ci(ci, &report)?;
    print_banner(report.passed(), palette, out)?;

    Ok(if report.passed() { 0 } else { 1 })
}

/// Classify the deployment directories, printing a line per directory and
/// the summary. Returns `None` when the deployment path does not exist.
fn check_structure(
    registry: &TypeRegistry,
    deploy_dir: &Path,
    palette: Palette,
    out: &mut dyn Write,
) -> Result<Option<StructureReport>> {
    if !deploy_dir.exists() {
        tracing::warn!(dir = %deploy_dir.display(), "deployment directory not found");
        let line = format!(
            "Warning: force-app/main/default directory not found at {}.",
            deploy_dir.display()
        );
        writeln!(out, "{}", palette.warning(&line))?;
        return Ok(None);
    }

    writeln!(out, "Checking directories in {}...", deploy_dir.display())?;

    let classifications = scan_deployment(deploy_dir, registry)
        .context("failed to scan deployment directory")?;

    let mut report = StructureReport::new();
    for classification in &classifications {
        let line = match classification.verdict {
            Verdict::Valid => palette.success(&format!(
                "✓ {} - Valid metadata type",
                classification.name
            )),
            Verdict::Invalid => palette.failure(&format!(
                "✗ {} - Invalid metadata type",
                classification.name
            )),
        };
        writeln!(out, "{line}")?;
        tracing::debug!(
            dir = %classification.name,
            normalized = %classification.normalized,
            verdict = ?classification.verdict,
            "classified directory"
        );
        report.record(classification);
    }

    print_summary(&report, out)?;
    Ok(Some(report))
}

fn print_summary(report: &StructureReport, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== Validation Summary ===")?;
    writeln!(out, "Total directories checked: {}", report.total())?;
    writeln!(out, "Valid directories: {}", report.valid_dirs.len())?;
    writeln!(out, "Invalid directories: {}", report.invalid_dirs.len())?;

    if report.has_errors() {
        writeln!(out, "\nInvalid directories found:")?;
        for name in &report.invalid_dirs {
            writeln!(out, "  - {name}")?;
        }
    }
    Ok(())
}

fn print_banner(passed: bool, palette: Palette, out: &mut dyn Write) -> Result<()> {
    let line = if passed {
        palette.success(
            "Validation successful! All directories in force-app/main/default are valid Salesforce metadata types.",
        )
    } else {
        palette.failure(
            "Validation failed! Some directories in force-app/main/default are not valid Salesforce metadata types.",
        )
    };
    writeln!(out, "{line}")?;
    Ok(())
}

fn publish_ci(ci: &CiEnvironment, report: &StructureReport) -> Result<()> {
    ci_output::publish(ci, report).context("failed to publish GitHub Actions outputs")?;
    Ok(())
}

/// Machine-readable form of a validation run.
#[derive(Debug, Serialize)]
struct JsonOutcome<'a> {
    types_dir: &'a Path,
    deploy_dir: &'a Path,
    deploy_dir_found: bool,
    registry_source: &'static str,
    registry_size: usize,
    passed: bool,
    #[serde(flatten)]
    report: &'a StructureReport,
}

fn validate_json(
    types_dir: &Path,
    deploy_dir: &Path,
    ci: &CiEnvironment,
    out: &mut dyn Write,
) -> Result<u8> {
    let registry = TypeRegistry::load(types_dir).context("failed to load metadata types")?;

    let deploy_dir_found = deploy_dir.exists();
    let report = if deploy_dir_found {
        let classifications = scan_deployment(deploy_dir, &registry)
            .context("failed to scan deployment directory")?;
        let report: StructureReport = classifications.iter().collect();
        publish_ci(ci, &report)?;
        report
    } else {
        tracing::warn!(dir = %deploy_dir.display(), "deployment directory not found");
        StructureReport::new()
    };

    let outcome = JsonOutcome {
        types_dir,
        deploy_dir,
        deploy_dir_found,
        registry_source: match registry.source() {
            RegistrySource::Directory(_) => "directory",
            RegistrySource::Fallback { .. } => "fallback",
            RegistrySource::Explicit => "explicit",
        },
        registry_size: registry.len(),
        passed: report.passed(),
        report: &report,
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;

    Ok(if report.passed() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &ValidateArgs, root: &Path) -> (u8, String) {
        let mut buf = Vec::new();
        let code = validate_with(
            args,
            root,
            Palette::plain(),
            &CiEnvironment::disabled(),
            &mut buf,
        )
        .unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn list_aliases_prints_table() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            list_aliases: true,
            ..Default::default()
        };
        let (code, text) = run(&args, dir.path());
        assert_eq!(code, 0);
        assert!(text.lines().any(|l| l == "classes -> ApexClass"));
        assert_eq!(text.lines().count(), normalize::aliases().len());
    }

    #[test]
    fn missing_deploy_dir_succeeds_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let (code, text) = run(&ValidateArgs::default(), dir.path());
        assert_eq!(code, 0);
        assert!(text.contains("Using fallback list."));
        assert!(text.contains("Warning: force-app/main/default directory not found at"));
        assert!(text.contains("Validation successful!"));
        assert!(!text.contains("=== Validation Summary ==="));
    }

    #[test]
    fn custom_paths_are_resolved_against_repo_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("registry")).unwrap();
        std::fs::write(dir.path().join("registry/Layout.json"), b"{}").unwrap();
        std::fs::create_dir_all(dir.path().join("src/layouts")).unwrap();

        let args = ValidateArgs {
            types_dir: Some(PathBuf::from("registry")),
            deploy_dir: Some(PathBuf::from("src")),
            ..Default::default()
        };
        let (code, text) = run(&args, dir.path());
        assert_eq!(code, 0, "output:\n{text}");
        assert!(text.contains("✓ layouts - Valid metadata type"));
    }

    #[test]
    fn json_output_reports_lists() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("metadata/types")).unwrap();
        std::fs::write(dir.path().join("metadata/types/ApexClass.json"), b"{}").unwrap();
        std::fs::create_dir_all(dir.path().join("force-app/main/default/classes")).unwrap();
        std::fs::create_dir_all(dir.path().join("force-app/main/default/widgets")).unwrap();

        let args = ValidateArgs {
            json: true,
            ..Default::default()
        };
        let (code, text) = run(&args, dir.path());
        assert_eq!(code, 1);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["passed"], false);
        assert_eq!(value["registry_source"], "directory");
        assert_eq!(value["registry_size"], 1);
        assert_eq!(value["valid_dirs"], serde_json::json!(["classes"]));
        assert_eq!(value["invalid_dirs"], serde_json::json!(["widgets"]));
    }
}
