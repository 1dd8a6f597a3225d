//! Step 2: package the executable into an installer.
//!
//! The installer script is patched in place with the release version and
//! output name, then handed to the installer compiler. A missing compiler or a
//! failed compile only warns: the installer may have been built by hand, so
//! the existence check at the end decides the outcome.

use crate::{
    cli::OutputManager,
    release::{
        artifact::{ArtifactKind, InstallerArtifact, VerifiedArtifact, format_size},
        command::ExternalCommand,
        error::Result,
        request::ReleaseRequest,
        settings::ReleaseSettings,
        template::patch_file,
        tool_detection::ToolResolver,
    },
};

/// Patches the installer script, compiles it when possible, and verifies the
/// installer exists.
pub async fn build_installer(
    settings: &ReleaseSettings,
    request: &ReleaseRequest,
    resolver: &dyn ToolResolver,
    output: &OutputManager,
) -> Result<InstallerArtifact> {
    let template = settings.installer_template();
    let substitutions = settings.substitutions(request);

    let report = patch_file(&template, &substitutions).await?;
    for placeholder in report.unmatched() {
        log::warn!("Placeholder not found in {}: {}", template.display(), placeholder);
        output.warn(&format!("Placeholder not found, left unchanged: {}", placeholder))?;
    }
    output.println(&format!(
        "Updated {} with version {} ({} replacement(s))",
        template.display(),
        request.version(),
        report.total()
    ))?;

    match resolver.locate() {
        Some(compiler) => {
            let command = ExternalCommand::new(&compiler)
                .arg(&template)
                .current_dir(settings.project_root());
            output.progress(&format!("Running `{}`", command.display()))?;

            match command.run().await {
                Ok(()) => output.success("Installer compiled successfully")?,
                Err(e) => {
                    log::warn!("Installer compilation failed: {}", e);
                    output.warn(&format!("Installer compilation failed: {}", e))?;
                    output.indent(&format!(
                        "Please compile manually: {}",
                        template.display()
                    ))?;
                }
            }
        }
        None => {
            log::warn!("Installer compiler not found");
            output.warn("Installer compiler (Inno Setup) not found")?;
            output.indent(&format!("Please compile manually: {}", template.display()))?;
        }
    }

    let installer =
        VerifiedArtifact::verify(ArtifactKind::Installer, settings.installer_path(request)).await?;

    output.success(&format!("Installer created: {}", installer.path().display()))?;
    output.indent(&format!("Size: {} bytes", format_size(installer.size())))?;

    Ok(installer)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::release::{Error, request::ReleaseKind, settings::ReleaseSettingsBuilder};
    use std::path::{Path, PathBuf};

    /// Installer script that doubles as a shell script: `sh setup.iss` writes
    /// the installer named by the (patched) `OutputBaseFilename` line.
    const SCRIPT: &str = r#"#define AppVersion "1.0.0"
OutputBaseFilename=App-Setup
mkdir -p installer/output
printf 'installer' > "installer/output/$OutputBaseFilename.exe"
"#;

    fn settings(root: &Path) -> ReleaseSettings {
        ReleaseSettingsBuilder::new()
            .project_root(root)
            .product_name("App")
            .build()
            .unwrap()
    }

    fn write_template(root: &Path, content: &str) -> PathBuf {
        let path = root.join("installer/setup.iss");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn compiles_with_resolved_tool() {
        let dir = tempfile::tempdir().unwrap();
        let template = write_template(dir.path(), SCRIPT);
        let request = ReleaseRequest::new("1.0.1", ReleaseKind::Patch);

        let installer = build_installer(
            &settings(dir.path()),
            &request,
            &Some(PathBuf::from("/bin/sh")),
            &OutputManager::quiet(),
        )
        .await
        .unwrap();

        assert!(installer.path().ends_with("installer/output/App-1.0.1-Patch.exe"));
        assert_eq!(
            std::fs::read_to_string(&template).unwrap(),
            SCRIPT
                .replace("#define AppVersion \"1.0.0\"", "#define AppVersion \"1.0.1\"")
                .replace("OutputBaseFilename=App-Setup", "OutputBaseFilename=App-1.0.1-Patch")
        );
    }

    #[tokio::test]
    async fn missing_tool_fails_at_existence_check() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), SCRIPT);
        let request = ReleaseRequest::new("2.1.0", ReleaseKind::Full);

        let err = build_installer(
            &settings(dir.path()),
            &request,
            &None::<PathBuf>,
            &OutputManager::quiet(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            Error::MissingArtifact { kind: ArtifactKind::Installer, ref path }
                if path.ends_with("App-2.1.0-Setup.exe")
        ));
    }

    #[tokio::test]
    async fn failed_compile_still_accepts_manual_installer() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "#define AppVersion \"1.0.0\"\nexit 1\n");
        let request = ReleaseRequest::new("2.1.0", ReleaseKind::Full);
        let settings = settings(dir.path());
        std::fs::create_dir_all(settings.installer_output_dir()).unwrap();
        std::fs::write(settings.installer_path(&request), b"built by hand").unwrap();

        let installer = build_installer(
            &settings,
            &request,
            &Some(PathBuf::from("/bin/sh")),
            &OutputManager::quiet(),
        )
        .await
        .unwrap();

        assert_eq!(installer.size(), 13);
    }

    #[tokio::test]
    async fn drifted_template_keeps_its_text() {
        let dir = tempfile::tempdir().unwrap();
        let drifted = "#define AppVersion \"0.9.0\"\nOutputBaseFilename=App-Setup\n";
        let template = write_template(dir.path(), drifted);
        let request = ReleaseRequest::new("1.0.1", ReleaseKind::Patch);

        let _ = build_installer(
            &settings(dir.path()),
            &request,
            &None::<PathBuf>,
            &OutputManager::quiet(),
        )
        .await;

        assert_eq!(
            std::fs::read_to_string(&template).unwrap(),
            "#define AppVersion \"0.9.0\"\nOutputBaseFilename=App-1.0.1-Patch\n"
        );
    }

    #[tokio::test]
    async fn missing_template_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let request = ReleaseRequest::new("1.0.1", ReleaseKind::Patch);

        let err = build_installer(
            &settings(dir.path()),
            &request,
            &None::<PathBuf>,
            &OutputManager::quiet(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Fs { .. }));
    }
}
