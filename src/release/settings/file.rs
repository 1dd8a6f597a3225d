//! `release.toml` overlay.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    bail,
    release::error::{Error, ErrorExt, Result},
};

/// Configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "release.toml";

/// Optional overrides read from `release.toml`.
///
/// ```toml
/// product_name = "CoomerBetterUI"
/// build_command = ["python", "build.py"]
/// installer_template = "installer/setup.iss"
/// compiler_candidates = ['C:\Program Files (x86)\Inno Setup 6\ISCC.exe']
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub product_name: Option<String>,
    pub build_command: Option<Vec<String>>,
    pub executable: Option<PathBuf>,
    pub installer_template: Option<PathBuf>,
    pub installer_output_dir: Option<PathBuf>,
    pub installer_extension: Option<String>,
    pub version_placeholder: Option<String>,
    pub version_replacement: Option<String>,
    pub output_name_placeholder: Option<String>,
    pub output_name_replacement: Option<String>,
    pub compiler_candidates: Option<Vec<PathBuf>>,
    pub compiler_program: Option<String>,
    pub download_url: Option<String>,
    pub homepage_url: Option<String>,
    pub issues_url: Option<String>,
}

impl FileConfig {
    /// Reads and parses a configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).fs_context("reading release configuration", path)?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if config.build_command.as_ref().is_some_and(Vec::is_empty) {
            bail!("build_command in {} must name a program", path.display());
        }

        Ok(config)
    }
}
