//! Core ReleaseSettings struct and implementations.

use std::path::{Path, PathBuf};

use crate::release::{
    command::ExternalCommand,
    error::{Context, Result},
    request::ReleaseRequest,
    template::Substitutions,
    tool_detection::CandidatePathResolver,
};

use super::{FileConfig, ReleaseSettingsBuilder, file::CONFIG_FILE_NAME};

/// Resolved configuration for one release run.
///
/// Relative paths are interpreted against [`project_root`](Self::project_root).
/// Replacement and URL templates may use `{product}`, `{version}`,
/// `{output_name}` and `{filename}`.
///
/// # Examples
///
/// ```no_run
/// use release_builder::release::{ReleaseSettings, ReleaseSettingsBuilder};
///
/// # fn example() -> release_builder::release::Result<()> {
/// let settings = ReleaseSettingsBuilder::new()
///     .project_root(".")
///     .product_name("MyApp")
///     .build_command(vec!["python".into(), "build.py".into()])
///     .build()?;
/// assert_eq!(settings.product_name(), "MyApp");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ReleaseSettings {
    pub(super) product_name: String,
    pub(super) project_root: PathBuf,
    pub(super) build_command: Vec<String>,
    pub(super) executable: PathBuf,
    pub(super) installer_template: PathBuf,
    pub(super) installer_output_dir: PathBuf,
    pub(super) installer_extension: String,
    pub(super) version_placeholder: String,
    pub(super) version_replacement: String,
    pub(super) output_name_placeholder: String,
    pub(super) output_name_replacement: String,
    pub(super) compiler_candidates: Vec<PathBuf>,
    pub(super) compiler_program: Option<String>,
    pub(super) download_url: String,
    pub(super) homepage_url: String,
    pub(super) issues_url: String,
}

impl ReleaseSettings {
    /// Loads settings for `project_root`.
    ///
    /// With `config` set, that file must exist. Otherwise `release.toml` in the
    /// project root is used when present and defaults apply when it is not.
    pub fn load(project_root: &Path, config: Option<&Path>) -> Result<Self> {
        let file_config = match config {
            Some(path) => Some(FileConfig::from_path(path)?),
            None => {
                let default_path = project_root.join(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Some(FileConfig::from_path(&default_path)?)
                } else {
                    log::debug!(
                        "No {} at {}, using defaults",
                        CONFIG_FILE_NAME,
                        project_root.display()
                    );
                    None
                }
            }
        };

        let mut builder = ReleaseSettingsBuilder::new().project_root(project_root);
        if let Some(file_config) = file_config {
            builder = builder.file_config(file_config);
        }
        builder.build()
    }

    /// Product name used in file names and documents.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Directory the build runs in and relative paths resolve against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The application build command, run from the project root.
    pub fn build_command(&self) -> Result<ExternalCommand> {
        Ok(ExternalCommand::from_argv(self.build_command.as_slice())
            .context("build_command must name a program")?
            .current_dir(&self.project_root))
    }

    /// Where the build command is expected to leave the executable.
    pub fn executable_path(&self) -> PathBuf {
        self.resolve(&self.executable)
    }

    /// Installer script rewritten before compilation.
    pub fn installer_template(&self) -> PathBuf {
        self.resolve(&self.installer_template)
    }

    /// Directory the installer compiler writes into.
    pub fn installer_output_dir(&self) -> PathBuf {
        self.resolve(&self.installer_output_dir)
    }

    /// Installer base name without extension, e.g. `App-1.0.1-Patch`.
    pub fn installer_output_name(&self, request: &ReleaseRequest) -> String {
        format!(
            "{}-{}-{}",
            self.product_name,
            request.version(),
            request.kind().installer_suffix()
        )
    }

    /// Installer file name, e.g. `App-1.0.1-Patch.exe`.
    pub fn installer_file_name(&self, request: &ReleaseRequest) -> String {
        let name = self.installer_output_name(request);
        if self.installer_extension.is_empty() {
            name
        } else {
            format!("{}.{}", name, self.installer_extension)
        }
    }

    /// Where the compiled installer is expected.
    pub fn installer_path(&self, request: &ReleaseRequest) -> PathBuf {
        self.installer_output_dir()
            .join(self.installer_file_name(request))
    }

    /// `RELEASE_NOTES_v<version>.md` inside the installer output directory.
    pub fn release_notes_path(&self, version: &str) -> PathBuf {
        self.installer_output_dir()
            .join(format!("RELEASE_NOTES_v{version}.md"))
    }

    /// Placeholder swaps applied to the installer script.
    pub fn substitutions(&self, request: &ReleaseRequest) -> Substitutions {
        let output_name = self.installer_output_name(request);
        let vars = [
            ("{product}", self.product_name.as_str()),
            ("{version}", request.version()),
            ("{output_name}", output_name.as_str()),
        ];

        Substitutions::new()
            .with(
                expand(&self.version_placeholder, &vars),
                expand(&self.version_replacement, &vars),
            )
            .with(
                expand(&self.output_name_placeholder, &vars),
                expand(&self.output_name_replacement, &vars),
            )
    }

    /// Resolver probing the configured compiler locations.
    pub fn compiler_resolver(&self) -> CandidatePathResolver {
        let resolver = CandidatePathResolver::new(self.compiler_candidates.clone());
        match &self.compiler_program {
            Some(program) => resolver.with_path_lookup(program.clone()),
            None => resolver,
        }
    }

    /// Public download URL for an artifact of `version`.
    pub fn download_url(&self, version: &str, filename: &str) -> String {
        expand(
            &self.download_url,
            &[
                ("{product}", self.product_name.as_str()),
                ("{version}", version),
                ("{filename}", filename),
            ],
        )
    }

    /// Project documentation link.
    pub fn homepage_url(&self) -> &str {
        &self.homepage_url
    }

    /// Issue tracker link.
    pub fn issues_url(&self) -> &str {
        &self.issues_url
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

fn expand(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter()
        .fold(template.to_string(), |acc, (key, value)| acc.replace(key, value))
}
