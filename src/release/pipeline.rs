//! Release pipeline orchestration.
//!
//! Runs the four release steps strictly in order:
//!
//! 1. [`Phase::BuildExecutable`] - run the build command, verify the executable
//! 2. [`Phase::BuildInstaller`] - patch the installer script, compile, verify
//! 3. [`Phase::GenerateManifestEntry`] - checksum and describe the installer
//! 4. [`Phase::WriteReleaseNotes`] - render and write the release notes
//!
//! The first failure ends the run. Side effects of earlier steps (the built
//! executable, the patched installer script) are left in place.

use std::{fmt, path::PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::cli::OutputManager;

use super::{
    artifact::{BuildArtifact, InstallerArtifact},
    error::Error,
    manifest::{ManifestEntry, generate_manifest_entry, manifest_snippet},
    notes::write_release_notes,
    phases::{build_executable, build_installer},
    request::ReleaseRequest,
    settings::ReleaseSettings,
    tool_detection::ToolResolver,
};

/// One step of the release pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Step 1.
    BuildExecutable,
    /// Step 2.
    BuildInstaller,
    /// Step 3.
    GenerateManifestEntry,
    /// Step 4.
    WriteReleaseNotes,
}

impl Phase {
    /// 1-based step number.
    pub fn step(self) -> u8 {
        match self {
            Phase::BuildExecutable => 1,
            Phase::BuildInstaller => 2,
            Phase::GenerateManifestEntry => 3,
            Phase::WriteReleaseNotes => 4,
        }
    }

    /// Section title.
    pub fn title(self) -> &'static str {
        match self {
            Phase::BuildExecutable => "Building Executable",
            Phase::BuildInstaller => "Building Installer",
            Phase::GenerateManifestEntry => "Generating Manifest Entry",
            Phase::WriteReleaseNotes => "Creating Release Notes",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} ({})", self.step(), self.title())
    }
}

/// The phase that stopped the run and why.
#[derive(Debug, Error)]
#[error("release failed at {phase}: {error}")]
pub struct PipelineFailure {
    /// Failing phase
    pub phase: Phase,
    /// Cause
    #[source]
    pub error: Error,
}

/// Everything a successful run produced.
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Verified executable from step 1
    pub executable: BuildArtifact,
    /// Verified installer from step 2
    pub installer: InstallerArtifact,
    /// Manifest entry from step 3
    pub manifest_entry: ManifestEntry,
    /// Release notes file from step 4
    pub release_notes: PathBuf,
}

/// Sequences one release run.
///
/// # Examples
///
/// ```no_run
/// use release_builder::cli::OutputManager;
/// use release_builder::release::{ReleaseKind, ReleasePipeline, ReleaseRequest, ReleaseSettings};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ReleaseSettings::load(std::path::Path::new("."), None)?;
/// let request = ReleaseRequest::new("1.0.1", ReleaseKind::Patch);
/// let outcome = ReleasePipeline::new(settings, request, OutputManager::new(false, false))
///     .run()
///     .await?;
/// println!("{}", outcome.manifest_entry.checksum);
/// # Ok(())
/// # }
/// ```
pub struct ReleasePipeline {
    settings: ReleaseSettings,
    request: ReleaseRequest,
    resolver: Box<dyn ToolResolver>,
    output: OutputManager,
}

impl fmt::Debug for ReleasePipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleasePipeline")
            .field("settings", &self.settings)
            .field("request", &self.request)
            .field("resolver", &"<ToolResolver>")
            .field("output", &self.output)
            .finish()
    }
}

impl ReleasePipeline {
    /// Creates a pipeline that locates the installer compiler from `settings`.
    pub fn new(settings: ReleaseSettings, request: ReleaseRequest, output: OutputManager) -> Self {
        let resolver = Box::new(settings.compiler_resolver());
        Self {
            settings,
            request,
            resolver,
            output,
        }
    }

    /// Replaces the installer compiler resolver.
    pub fn with_resolver(mut self, resolver: impl ToolResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Settings in use.
    pub fn settings(&self) -> &ReleaseSettings {
        &self.settings
    }

    /// Request being released.
    pub fn request(&self) -> &ReleaseRequest {
        &self.request
    }

    /// Runs every phase, dating the manifest entry with today's local date.
    pub async fn run(&self) -> Result<ReleaseOutcome, PipelineFailure> {
        self.run_on(chrono::Local::now().date_naive()).await
    }

    /// Runs every phase with an explicit release date.
    pub async fn run_on(&self, today: NaiveDate) -> Result<ReleaseOutcome, PipelineFailure> {
        let executable = self
            .step(Phase::BuildExecutable, build_executable(&self.settings, &self.output))
            .await?;

        let installer = self
            .step(
                Phase::BuildInstaller,
                build_installer(
                    &self.settings,
                    &self.request,
                    self.resolver.as_ref(),
                    &self.output,
                ),
            )
            .await?;

        let manifest_entry = self
            .step(Phase::GenerateManifestEntry, self.manifest_phase(&installer, today))
            .await?;

        let release_notes = self
            .step(Phase::WriteReleaseNotes, self.notes_phase(&installer, &manifest_entry))
            .await?;

        Ok(ReleaseOutcome {
            executable,
            installer,
            manifest_entry,
            release_notes,
        })
    }

    async fn step<T>(
        &self,
        phase: Phase,
        work: impl Future<Output = Result<T, Error>>,
    ) -> Result<T, PipelineFailure> {
        let fail = |error: Error| PipelineFailure { phase, error };

        self.output
            .section(&format!("STEP {}: {}", phase.step(), phase.title()))
            .map_err(|e| fail(e.into()))?;

        log::debug!("Starting {}", phase);
        work.await.map_err(fail)
    }

    async fn manifest_phase(
        &self,
        installer: &InstallerArtifact,
        today: NaiveDate,
    ) -> Result<ManifestEntry, Error> {
        let entry = generate_manifest_entry(installer, &self.request, &self.settings, today).await?;

        self.output.success("Manifest entry generated:")?;
        self.output
            .println(&manifest_snippet(self.request.version(), &entry)?)?;

        Ok(entry)
    }

    async fn notes_phase(
        &self,
        installer: &InstallerArtifact,
        entry: &ManifestEntry,
    ) -> Result<PathBuf, Error> {
        let path = write_release_notes(installer, entry, &self.request, &self.settings).await?;
        self.output
            .success(&format!("Release notes created: {}", path.display()))?;
        Ok(path)
    }
}
