//! Test helpers for integration tests

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Installer script that is also a valid shell script.
///
/// Running `sh setup.iss` after the placeholders are patched writes the
/// installer named by the `OutputBaseFilename` line, standing in for the
/// real installer compiler.
pub const INSTALLER_SCRIPT: &str = r#"#define AppVersion "1.0.0"
OutputBaseFilename=App-Setup
mkdir -p installer/output
printf 'installer for %s\n' "$OutputBaseFilename" > "installer/output/$OutputBaseFilename.exe"
"#;

/// Build command that produces `dist/App`.
pub const BUILD_SCRIPT: &str = "mkdir -p dist && printf 'app binary' > dist/App";

/// A scratch project laid out like the real one.
pub struct TestProject {
    _root: TempDir,
    pub path: PathBuf,
}

impl TestProject {
    /// Creates a project containing `installer/setup.iss`.
    pub fn new() -> Result<Self> {
        let root = TempDir::new()?;
        let path = root.path().to_path_buf();

        std::fs::create_dir_all(path.join("installer"))?;
        std::fs::write(path.join("installer/setup.iss"), INSTALLER_SCRIPT)?;

        Ok(Self { _root: root, path })
    }

    /// Writes `release.toml` with the given build command and compiler candidates.
    pub fn write_config(&self, build_script: &str, compiler_candidates: &[&str]) -> Result<()> {
        let candidates = compiler_candidates
            .iter()
            .map(|c| format!("{c:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        std::fs::write(
            self.path.join("release.toml"),
            format!(
                r#"product_name = "App"
executable = "dist/App"
build_command = ["sh", "-c", {build_script:?}]
compiler_candidates = [{candidates}]
compiler_program = "definitely-not-an-installer-compiler"
download_url = "https://downloads.example/app/v{{version}}/{{filename}}"
"#
            ),
        )?;
        Ok(())
    }

    pub fn template(&self) -> String {
        std::fs::read_to_string(self.path.join("installer/setup.iss")).unwrap_or_default()
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.path.join("installer/output").join(name)
    }

    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.path.join(relative).exists()
    }
}

/// Hex SHA-256 of a file, computed independently of the crate under test.
pub fn sha256_hex(path: &Path) -> Result<String> {
    use sha2::{Digest, Sha256};
    Ok(hex::encode(Sha256::digest(std::fs::read(path)?)))
}
