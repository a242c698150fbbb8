//! # sfmeta CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sfmeta_cli::split::{run_split, SplitArgs};
use sfmeta_cli::style::{ColorChoice, Palette};
use sfmeta_cli::validate::{run_validate, ValidateArgs};

/// Salesforce metadata repository tooling.
///
/// Validates the deployment source tree against the known metadata types
/// and maintains the per-type registry derived from the coverage document.
#[derive(Parser, Debug)]
#[command(name = "sfmeta", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Repository root. Defaults to the nearest ancestor of the current
    /// directory containing `force-app/` or `metadata/`.
    #[arg(long, global = true, value_name = "DIR")]
    repo_root: Option<PathBuf>,

    /// When to color console output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that force-app/main/default only contains metadata type directories.
    Validate(ValidateArgs),

    /// Split metadata-coverage.json into one descriptor file per type.
    Split(SplitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level. Logs go to stderr so the
    // report on stdout stays clean.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("sfmeta CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let repo_root = cli.repo_root.clone().unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        sfmeta_cli::find_repo_root(&cwd).unwrap_or_else(|| {
            tracing::warn!("Could not locate repository root; using current directory");
            cwd
        })
    });

    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let palette = Palette::from_choice(cli.color);

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &repo_root, palette),
        Commands::Split(args) => run_split(&args, &repo_root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
