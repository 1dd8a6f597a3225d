//! Command line interface for the release tool.
//!
//! Parses arguments, loads settings, runs the release pipeline and maps the
//! outcome to an exit code.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use std::ffi::OsString;

use clap::{Parser, error::ErrorKind};

use crate::error::{CliError, Result};
use crate::release::{ReleaseKind, ReleaseOutcome, ReleasePipeline, ReleaseRequest, ReleaseSettings};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_from(std::env::args_os()).await
}

/// Runs the CLI with an explicit argument list (first item is the program name).
///
/// Usage errors exit with 1, `--help`/`--version` with 0. Nothing is read or
/// written before the arguments validate.
pub async fn run_from<I, T>(argv: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            });
        }
    };

    if let Err(reason) = args.validate() {
        eprintln!("Error: {}", reason);
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);
    let request = args.release_request()?;

    if request.kind() == ReleaseKind::Full && args.from_version.is_some() {
        config.warn("--from-version only applies to patch releases; ignoring it")?;
    }

    let project_root = match &args.project_root {
        Some(root) => root.clone(),
        None => std::env::current_dir().map_err(|e| CliError::ExecutionFailed {
            command: "resolve project root".to_string(),
            reason: e.to_string(),
        })?,
    };
    config.verbose_println(&format!("Project root: {}", project_root.display()))?;

    let settings = ReleaseSettings::load(&project_root, args.config.as_deref())?;
    print_banner(&config, &settings, &request)?;

    let pipeline = ReleasePipeline::new(settings, request, config.output().clone());
    match pipeline.run().await {
        Ok(outcome) => {
            print_summary(&config, &outcome, pipeline.request())?;
            Ok(0)
        }
        Err(failure) => {
            log::error!("{}", failure);
            config.error(&format!(
                "Build process failed at Step {}: {}",
                failure.phase.step(),
                failure.error
            ))?;
            Ok(1)
        }
    }
}

fn print_banner(
    config: &RuntimeConfig,
    settings: &ReleaseSettings,
    request: &ReleaseRequest,
) -> std::io::Result<()> {
    config.output().banner(&[
        format!("{} Release Builder v{}", settings.product_name(), request.version()),
        format!("Type: {}", request.kind().as_str().to_uppercase()),
    ])
}

fn print_summary(
    config: &RuntimeConfig,
    outcome: &ReleaseOutcome,
    request: &ReleaseRequest,
) -> std::io::Result<()> {
    let version = request.version();

    config.output().banner(&["BUILD COMPLETE".to_string()])?;
    config.success(&format!("Installer: {}", outcome.installer.path().display()))?;
    config.success(&format!("Release Notes: {}", outcome.release_notes.display()))?;
    config.section("Next Steps")?;
    for (n, step) in [
        "Review release notes and add detailed changelog".to_string(),
        "Test installer on clean machine".to_string(),
        format!("Create git tag: git tag -a v{version} -m 'Version {version}'"),
        format!("Push tag: git push origin v{version}"),
        "Create GitHub release and upload installer".to_string(),
        "Update update_manifest.json with generated entry".to_string(),
    ]
    .iter()
    .enumerate()
    {
        config.indent(&format!("{}. {}", n + 1, step))?;
    }
    Ok(())
}
