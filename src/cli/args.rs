//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap,
//! with validation of the release kind before anything touches the disk.

use clap::Parser;
use std::path::PathBuf;

use crate::error::CliError;
use crate::release::{ReleaseKind, ReleaseRequest};

/// Build-and-release orchestration for the desktop application
#[derive(Parser, Debug)]
#[command(
    name = "release_builder",
    version,
    about = "Builds the executable, installer, manifest entry and release notes",
    long_about = "Builds the application executable, packages it into an installer, \
computes the update manifest entry and writes release notes.

Usage:
  release_builder 1.0.1 patch
  release_builder 1.1.0 full
  release_builder 1.1.0 patch --from-version 1.0.9

Exit code 0 = installer and release notes exist in the installer output directory."
)]
pub struct Args {
    /// Version to release (e.g. 1.0.1)
    #[arg(value_name = "VERSION")]
    pub target_version: String,

    /// Release kind: patch or full
    #[arg(value_name = "KIND", default_value = "patch")]
    pub kind: String,

    /// Project root containing build.py, dist/ and installer/
    ///
    /// Defaults to the current directory.
    #[arg(long, value_name = "DIR", env = "RELEASE_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Release configuration file (defaults to <project-root>/release.toml if present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Version a patch applies over, when it cannot be derived from VERSION
    #[arg(long, value_name = "VERSION")]
    pub from_version: Option<String>,

    /// Show detailed output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.target_version.trim().is_empty() {
            return Err("Version cannot be empty".to_string());
        }

        self.kind.parse::<ReleaseKind>()?;

        if self.from_version.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err("--from-version cannot be empty".to_string());
        }

        Ok(())
    }

    /// Release request described by these arguments.
    pub fn release_request(&self) -> Result<ReleaseRequest, CliError> {
        let kind = self
            .kind
            .parse::<ReleaseKind>()
            .map_err(|reason| CliError::InvalidArguments { reason })?;

        let request = ReleaseRequest::new(self.target_version.clone(), kind);
        Ok(match (&self.from_version, kind) {
            (Some(from), ReleaseKind::Patch) => request.with_from_version(from.clone()),
            _ => request,
        })
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print error message
    pub fn error(&self, message: &str) -> std::io::Result<()> {
        self.output.error(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
