//! Release notes rendering.
//!
//! Renders the markdown document shipped next to the installer using
//! Handlebars, then writes it into the installer output directory.

mod template;

use std::{collections::BTreeMap, path::PathBuf};

use handlebars::Handlebars;

use self::template::RELEASE_NOTES_TEMPLATE;
use super::{
    artifact::{InstallerArtifact, format_size},
    checksum::checksum_hex,
    error::{Error, ErrorExt, Result},
    manifest::{ManifestEntry, manifest_snippet},
    request::ReleaseRequest,
    settings::ReleaseSettings,
};

/// Renders the release notes document.
pub fn render_release_notes(
    installer: &InstallerArtifact,
    entry: &ManifestEntry,
    request: &ReleaseRequest,
    settings: &ReleaseSettings,
) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    let mut data = BTreeMap::new();
    data.insert("product_name", settings.product_name().to_string());
    data.insert("version", request.version().to_string());
    data.insert("release_kind", request.kind().as_str().to_uppercase());
    data.insert("file_name", installer.file_name());
    data.insert("size", format_size(installer.size()));
    data.insert("checksum", entry.checksum.clone());
    data.insert("checksum_hex", checksum_hex(&entry.checksum).to_string());
    data.insert("from_version", entry.from_version.clone().unwrap_or_default());
    data.insert("manifest_snippet", manifest_snippet(request.version(), entry)?);
    data.insert("url", entry.url.clone());
    data.insert("homepage_url", settings.homepage_url().to_string());
    data.insert("issues_url", settings.issues_url().to_string());

    handlebars
        .register_template_string("release_notes.md", RELEASE_NOTES_TEMPLATE)
        .map_err(|e| Error::Template(format!("failed to register release notes template: {}", e)))?;

    handlebars
        .render("release_notes.md", &data)
        .map_err(|e| Error::Template(format!("failed to render release notes: {}", e)))
}

/// Renders the release notes and writes them to
/// `<output_dir>/RELEASE_NOTES_v<version>.md`, returning that path.
pub async fn write_release_notes(
    installer: &InstallerArtifact,
    entry: &ManifestEntry,
    request: &ReleaseRequest,
    settings: &ReleaseSettings,
) -> Result<PathBuf> {
    let notes = render_release_notes(installer, entry, request, settings)?;
    let notes_path = settings.release_notes_path(request.version());

    if let Some(parent) = notes_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .fs_context("creating release notes directory", parent)?;
    }
    tokio::fs::write(&notes_path, notes)
        .await
        .fs_context("writing release notes", &notes_path)?;

    Ok(notes_path)
}
