//! End-to-end pipeline runs against a scratch project

use crate::helpers::{BUILD_SCRIPT, TestProject, sha256_hex};
use anyhow::Result;
use chrono::NaiveDate;
use release_builder::cli::OutputManager;
use release_builder::release::{
    ArtifactKind, Error, Phase, ReleaseKind, ReleasePipeline, ReleaseRequest, ReleaseSettings,
};
use std::path::PathBuf;

fn release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn pipeline(project: &TestProject, request: ReleaseRequest) -> Result<ReleasePipeline> {
    let settings = ReleaseSettings::load(&project.path, None)?;
    Ok(ReleasePipeline::new(settings, request, OutputManager::quiet()))
}

#[tokio::test]
async fn test_patch_release_end_to_end() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config(BUILD_SCRIPT, &[])?;

    let outcome = pipeline(&project, ReleaseRequest::new("1.0.1", ReleaseKind::Patch))?
        .with_resolver(Some(PathBuf::from("/bin/sh")))
        .run_on(release_date())
        .await?;

    let installer = project.output("App-1.0.1-Patch.exe");
    assert_eq!(outcome.installer.path(), installer);
    assert!(outcome.executable.path().ends_with("dist/App"));

    let entry = &outcome.manifest_entry;
    assert_eq!(entry.from_version.as_deref(), Some("1.0.0"));
    assert_eq!(entry.checksum, format!("sha256:{}", sha256_hex(&installer)?));
    assert_eq!(entry.size, std::fs::metadata(&installer)?.len());
    assert_eq!(entry.release_date, release_date());
    assert_eq!(
        entry.url,
        "https://downloads.example/app/v1.0.1/App-1.0.1-Patch.exe"
    );

    assert_eq!(outcome.release_notes, project.output("RELEASE_NOTES_v1.0.1.md"));
    let notes = std::fs::read_to_string(&outcome.release_notes)?;
    assert!(notes.contains(&entry.checksum));
    assert!(notes.contains("\"from_version\": \"1.0.0\""));

    let template = project.template();
    assert!(template.contains("#define AppVersion \"1.0.1\""));
    assert!(template.contains("OutputBaseFilename=App-1.0.1-Patch"));

    Ok(())
}

#[tokio::test]
async fn test_full_release_without_compiler_fails_at_installer_check() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config(BUILD_SCRIPT, &[])?;

    let failure = pipeline(&project, ReleaseRequest::new("2.1.0", ReleaseKind::Full))?
        .with_resolver(None::<PathBuf>)
        .run_on(release_date())
        .await
        .unwrap_err();

    assert_eq!(failure.phase, Phase::BuildInstaller);
    assert!(matches!(
        failure.error,
        Error::MissingArtifact { kind: ArtifactKind::Installer, .. }
    ));

    // Step 1 ran and the template was still rewritten.
    assert!(project.exists("dist/App"));
    assert!(project.template().contains("OutputBaseFilename=App-2.1.0-Setup"));

    assert!(!project.exists("installer/output/App-2.1.0-Setup.exe"));
    assert!(!project.exists("installer/output/RELEASE_NOTES_v2.1.0.md"));

    Ok(())
}

#[tokio::test]
async fn test_failing_build_command_stops_before_installer() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config("exit 2", &[])?;
    let original_template = project.template();

    let failure = pipeline(&project, ReleaseRequest::new("1.0.1", ReleaseKind::Patch))?
        .with_resolver(Some(PathBuf::from("/bin/sh")))
        .run_on(release_date())
        .await
        .unwrap_err();

    assert_eq!(failure.phase, Phase::BuildExecutable);
    assert!(matches!(failure.error, Error::ToolExited { code: Some(2), .. }));
    assert_eq!(project.template(), original_template);

    Ok(())
}

#[tokio::test]
async fn test_successful_build_without_executable_is_missing_artifact() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config("true", &[])?;

    let failure = pipeline(&project, ReleaseRequest::new("1.0.1", ReleaseKind::Patch))?
        .with_resolver(Some(PathBuf::from("/bin/sh")))
        .run_on(release_date())
        .await
        .unwrap_err();

    assert_eq!(failure.phase, Phase::BuildExecutable);
    assert!(matches!(
        failure.error,
        Error::MissingArtifact { kind: ArtifactKind::Executable, .. }
    ));

    Ok(())
}

#[tokio::test]
async fn test_patch_from_zero_needs_explicit_predecessor() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config(BUILD_SCRIPT, &[])?;

    let failure = pipeline(&project, ReleaseRequest::new("1.1.0", ReleaseKind::Patch))?
        .with_resolver(Some(PathBuf::from("/bin/sh")))
        .run_on(release_date())
        .await
        .unwrap_err();
    assert_eq!(failure.phase, Phase::GenerateManifestEntry);
    assert!(matches!(failure.error, Error::InvalidVersion { .. }));

    // The installer from step 2 exists; rerunning with a pinned predecessor succeeds.
    std::fs::write(project.path.join("installer/setup.iss"), crate::helpers::INSTALLER_SCRIPT)?;
    let request = ReleaseRequest::new("1.1.0", ReleaseKind::Patch).with_from_version("1.0.9");
    let outcome = pipeline(&project, request)?
        .with_resolver(Some(PathBuf::from("/bin/sh")))
        .run_on(release_date())
        .await?;
    assert_eq!(outcome.manifest_entry.from_version.as_deref(), Some("1.0.9"));

    Ok(())
}

#[tokio::test]
async fn test_configured_candidates_locate_compiler() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config(BUILD_SCRIPT, &["/definitely/missing/ISCC.exe", "/bin/sh"])?;

    let outcome = pipeline(&project, ReleaseRequest::new("3.0.0", ReleaseKind::Full))?
        .run_on(release_date())
        .await?;

    assert_eq!(outcome.manifest_entry.from_version, None);
    assert!(project.exists("installer/output/App-3.0.0-Setup.exe"));

    Ok(())
}
