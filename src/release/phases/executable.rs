//! Step 1: build the application executable.

use crate::{
    cli::OutputManager,
    release::{
        artifact::{ArtifactKind, BuildArtifact, VerifiedArtifact, format_size},
        error::Result,
        settings::ReleaseSettings,
    },
};

/// Runs the build command, then verifies the executable exists.
///
/// A zero exit status is not enough: the executable must be on disk
/// afterwards or the phase fails with
/// [`Error::MissingArtifact`](crate::release::Error::MissingArtifact).
pub async fn build_executable(
    settings: &ReleaseSettings,
    output: &OutputManager,
) -> Result<BuildArtifact> {
    let command = settings.build_command()?;
    output.progress(&format!("Running `{}`", command.display()))?;

    command.run().await?;

    let executable =
        VerifiedArtifact::verify(ArtifactKind::Executable, settings.executable_path()).await?;

    output.success(&format!("Executable built: {}", executable.path().display()))?;
    output.indent(&format!("Size: {} bytes", format_size(executable.size())))?;

    Ok(executable)
}
