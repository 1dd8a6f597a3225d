//! Verified build outputs.
//!
//! External tools are never trusted on their exit status alone. An artifact
//! value only exists once its path has been confirmed to be a regular file.

use std::{
    fmt,
    io,
    path::{Path, PathBuf},
};

use super::error::{Error, ErrorExt, Result};

/// The two kinds of artifact the pipeline produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Application executable from the build command.
    Executable,
    /// Installer produced by the installer compiler.
    Installer,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Executable => f.write_str("Executable"),
            ArtifactKind::Installer => f.write_str("Installer"),
        }
    }
}

/// A file confirmed to exist on disk, with its size at verification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedArtifact {
    kind: ArtifactKind,
    path: PathBuf,
    size: u64,
}

impl VerifiedArtifact {
    /// Confirms `path` is a regular file.
    ///
    /// Returns [`Error::MissingArtifact`] when nothing (or a directory) is at
    /// the path; other metadata failures surface as [`Error::Fs`].
    pub async fn verify(kind: ArtifactKind, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::MissingArtifact { kind, path });
            }
            Err(e) => return Err(e).fs_context("reading artifact metadata", &path),
        };

        if !metadata.is_file() {
            return Err(Error::MissingArtifact { kind, path });
        }

        log::debug!("Verified {} at {} ({} bytes)", kind, path.display(), metadata.len());

        Ok(Self {
            kind,
            path,
            size: metadata.len(),
        })
    }

    /// Which artifact this is.
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Location on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component, as shown to users and used in download URLs.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Executable produced by the build phase.
pub type BuildArtifact = VerifiedArtifact;

/// Installer produced by the packaging phase.
pub type InstallerArtifact = VerifiedArtifact;

/// Formats a byte count with thousands separators, e.g. `1,234,567`.
pub fn format_size(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_size_groups_thousands() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(999), "999");
        assert_eq!(format_size(1000), "1,000");
        assert_eq!(format_size(1_234_567), "1,234,567");
        assert_eq!(format_size(12_345_678_901), "12,345,678,901");
    }

    #[tokio::test]
    async fn verify_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("App.exe");

        let err = VerifiedArtifact::verify(ArtifactKind::Executable, &path)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingArtifact { kind: ArtifactKind::Executable, ref path }
                if path.ends_with("App.exe")
        ));
    }

    #[tokio::test]
    async fn verify_rejects_directories() {
        let dir = tempfile::tempdir().unwrap();

        let err = VerifiedArtifact::verify(ArtifactKind::Installer, dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingArtifact { .. }));
    }

    #[tokio::test]
    async fn verify_records_size_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("App-1.0.1-Patch.exe");
        std::fs::write(&path, b"installer").unwrap();

        let artifact = VerifiedArtifact::verify(ArtifactKind::Installer, &path)
            .await
            .unwrap();
        assert_eq!(artifact.size(), 9);
        assert_eq!(artifact.file_name(), "App-1.0.1-Patch.exe");
        assert_eq!(artifact.kind(), ArtifactKind::Installer);
    }
}
