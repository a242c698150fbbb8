//! # GitHub Actions Step Outputs
//!
//! When running inside GitHub Actions, the validator publishes its result as
//! step outputs so later workflow steps can branch on it:
//!
//! ```text
//! has_errors=true
//! invalid_dirs=["UnknownType"]
//! valid_dirs=["classes", "Triggers"]
//! ```
//!
//! Lines are appended to the file named by `GITHUB_OUTPUT`. If that variable
//! is unset the lines go to a discard sink.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::CiOutputError;
use crate::json_text::inline_string_array;
use crate::structure::StructureReport;

/// Set to `true` by the GitHub Actions runner.
pub const GITHUB_ACTIONS_VAR: &str = "GITHUB_ACTIONS";

/// Path of the step output file provided by the runner.
pub const GITHUB_OUTPUT_VAR: &str = "GITHUB_OUTPUT";

/// CI context captured from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiEnvironment {
    /// Whether outputs should be published at all.
    pub github_actions: bool,
    /// Step output file, if the runner provided one.
    pub output_path: Option<PathBuf>,
}

impl CiEnvironment {
    /// Read the CI context from the current process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(GITHUB_ACTIONS_VAR).ok().as_deref(),
            std::env::var_os(GITHUB_OUTPUT_VAR),
        )
    }

    /// Build the CI context from raw variable values.
    ///
    /// Only the exact value `true` enables outputs. An empty output path is
    /// treated as unset.
    pub fn from_vars(github_actions: Option<&str>, output_path: Option<OsString>) -> Self {
        Self {
            github_actions: github_actions == Some("true"),
            output_path: output_path.filter(|p| !p.is_empty()).map(PathBuf::from),
        }
    }

    /// A context that never publishes outputs.
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// Render the three output lines for a report, each newline-terminated.
pub fn render_outputs(report: &StructureReport) -> String {
    format!(
        "has_errors={}\ninvalid_dirs={}\nvalid_dirs={}\n",
        report.has_errors(),
        inline_string_array(&report.invalid_dirs),
        inline_string_array(&report.valid_dirs),
    )
}

/// Publish `report` as step outputs if `env` is a GitHub Actions context.
///
/// Returns `true` when outputs were emitted (including to the discard sink).
pub fn publish(env: &CiEnvironment, report: &StructureReport) -> Result<bool, CiOutputError> {
    if !env.github_actions {
        return Ok(false);
    }

    let text = render_outputs(report);
    match &env.output_path {
        Some(path) => {
            let write_err = |source| CiOutputError::Write {
                path: path.clone(),
                source,
            };
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(write_err)?;
            file.write_all(text.as_bytes()).map_err(write_err)?;
            tracing::info!(path = %path.display(), "wrote GitHub Actions step outputs");
        }
        None => {
            tracing::debug!("{GITHUB_OUTPUT_VAR} not set; discarding step outputs");
            std::io::sink().write_all(text.as_bytes())?;
        }
    }
    Ok(true)
}
