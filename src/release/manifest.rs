//! Update manifest entries.
//!
//! A [`ManifestEntry`] describes one installer for the update-checking client.
//! It is only ever built from a verified [`InstallerArtifact`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    artifact::InstallerArtifact,
    checksum::calculate_checksum,
    error::Result,
    request::ReleaseRequest,
    settings::ReleaseSettings,
};

/// Manifest metadata for one release artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Public download location.
    pub url: String,
    /// `sha256:<64 lowercase hex>` of the installer.
    pub checksum: String,
    /// Installer size in bytes.
    pub size: u64,
    /// Changelog text, a stub to be filled in by hand.
    pub changelog: String,
    /// Day the entry was generated, serialized as `YYYY-MM-DD`.
    pub release_date: NaiveDate,
    /// Version a patch applies over; absent for full installers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_version: Option<String>,
}

/// Builds the manifest entry for `installer`, dated `today`.
///
/// Reads the installer once to checksum it. Fails if the checksum read fails
/// or a patch predecessor cannot be determined.
pub async fn generate_manifest_entry(
    installer: &InstallerArtifact,
    request: &ReleaseRequest,
    settings: &ReleaseSettings,
    today: NaiveDate,
) -> Result<ManifestEntry> {
    let from_version = request.predecessor()?;
    let checksum = calculate_checksum(installer.path()).await?;

    Ok(ManifestEntry {
        url: settings.download_url(request.version(), &installer.file_name()),
        checksum,
        size: installer.size(),
        changelog: changelog_stub(request.version()),
        release_date: today,
        from_version,
    })
}

/// Pretty JSON object keyed by version, ready to paste into the manifest file.
pub fn manifest_snippet(version: &str, entry: &ManifestEntry) -> Result<String> {
    let mut snippet = BTreeMap::new();
    snippet.insert(version, entry);
    Ok(serde_json::to_string_pretty(&snippet)?)
}

fn changelog_stub(version: &str) -> String {
    format!("## Version {version}\n\n### Changes\n- Changelog pending\n")
}
