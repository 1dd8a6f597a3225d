//! Builder for constructing ReleaseSettings.

use std::path::{Path, PathBuf};

use super::{FileConfig, ReleaseSettings};

const DEFAULT_PRODUCT_NAME: &str = "CoomerBetterUI";
const DEFAULT_TEMPLATE: &str = "installer/setup.iss";
const DEFAULT_OUTPUT_DIR: &str = "installer/output";
const DEFAULT_INSTALLER_EXTENSION: &str = "exe";
const DEFAULT_VERSION_PLACEHOLDER: &str = "#define AppVersion \"1.0.0\"";
const DEFAULT_VERSION_REPLACEMENT: &str = "#define AppVersion \"{version}\"";
const DEFAULT_OUTPUT_NAME_PLACEHOLDER: &str = "OutputBaseFilename={product}-Setup";
const DEFAULT_OUTPUT_NAME_REPLACEMENT: &str = "OutputBaseFilename={output_name}";
const DEFAULT_COMPILER_CANDIDATES: [&str; 2] = [
    r"C:\Program Files (x86)\Inno Setup 6\ISCC.exe",
    r"C:\Program Files\Inno Setup 6\ISCC.exe",
];
const DEFAULT_COMPILER_PROGRAM: &str = "iscc";
const DEFAULT_DOWNLOAD_URL: &str =
    "https://github.com/your-repo/coomer-betterui/releases/download/v{version}/{filename}";
const DEFAULT_HOMEPAGE_URL: &str = "https://github.com/your-repo/coomer-betterui";
const DEFAULT_ISSUES_URL: &str = "https://github.com/your-repo/coomer-betterui/issues";

/// Builder for constructing [`ReleaseSettings`].
///
/// Only the project root is required. Every other field falls back to the
/// standard project layout: `python build.py` producing `dist/<Product>`,
/// an Inno Setup script at `installer/setup.iss` compiled into
/// `installer/output`.
#[derive(Default, Debug)]
pub struct ReleaseSettingsBuilder {
    project_root: Option<PathBuf>,
    product_name: Option<String>,
    build_command: Option<Vec<String>>,
    executable: Option<PathBuf>,
    installer_template: Option<PathBuf>,
    installer_output_dir: Option<PathBuf>,
    installer_extension: Option<String>,
    version_placeholder: Option<String>,
    version_replacement: Option<String>,
    output_name_placeholder: Option<String>,
    output_name_replacement: Option<String>,
    compiler_candidates: Option<Vec<PathBuf>>,
    compiler_program: Option<Option<String>>,
    download_url: Option<String>,
    homepage_url: Option<String>,
    issues_url: Option<String>,
}

impl ReleaseSettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the product name.
    ///
    /// Default: `CoomerBetterUI`
    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Sets the build command as program followed by arguments.
    ///
    /// Default: `python build.py`
    pub fn build_command(mut self, argv: Vec<String>) -> Self {
        self.build_command = Some(argv);
        self
    }

    /// Sets the expected executable path.
    ///
    /// Default: `dist/<Product>`, with `.exe` on Windows
    pub fn executable<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.executable = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the installer script path.
    pub fn installer_template<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.installer_template = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the installer output directory.
    pub fn installer_output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.installer_output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the installer file extension (without the dot).
    pub fn installer_extension(mut self, extension: impl Into<String>) -> Self {
        self.installer_extension = Some(extension.into());
        self
    }

    /// Sets the version placeholder and its replacement template.
    pub fn version_placeholder(
        mut self,
        placeholder: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.version_placeholder = Some(placeholder.into());
        self.version_replacement = Some(replacement.into());
        self
    }

    /// Sets the output-name placeholder and its replacement template.
    pub fn output_name_placeholder(
        mut self,
        placeholder: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.output_name_placeholder = Some(placeholder.into());
        self.output_name_replacement = Some(replacement.into());
        self
    }

    /// Sets the ordered installer compiler candidates.
    pub fn compiler_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.compiler_candidates = Some(candidates);
        self
    }

    /// Sets the program searched on `PATH` after the candidates; `None` disables it.
    pub fn compiler_program(mut self, program: Option<String>) -> Self {
        self.compiler_program = Some(program);
        self
    }

    /// Sets the download URL template.
    pub fn download_url(mut self, template: impl Into<String>) -> Self {
        self.download_url = Some(template.into());
        self
    }

    /// Sets the documentation and issue tracker links.
    pub fn links(mut self, homepage: impl Into<String>, issues: impl Into<String>) -> Self {
        self.homepage_url = Some(homepage.into());
        self.issues_url = Some(issues.into());
        self
    }

    /// Overlays every field present in a `release.toml`.
    pub fn file_config(mut self, config: FileConfig) -> Self {
        let FileConfig {
            product_name,
            build_command,
            executable,
            installer_template,
            installer_output_dir,
            installer_extension,
            version_placeholder,
            version_replacement,
            output_name_placeholder,
            output_name_replacement,
            compiler_candidates,
            compiler_program,
            download_url,
            homepage_url,
            issues_url,
        } = config;

        self.product_name = product_name.or(self.product_name);
        self.build_command = build_command.or(self.build_command);
        self.executable = executable.or(self.executable);
        self.installer_template = installer_template.or(self.installer_template);
        self.installer_output_dir = installer_output_dir.or(self.installer_output_dir);
        self.installer_extension = installer_extension.or(self.installer_extension);
        self.version_placeholder = version_placeholder.or(self.version_placeholder);
        self.version_replacement = version_replacement.or(self.version_replacement);
        self.output_name_placeholder = output_name_placeholder.or(self.output_name_placeholder);
        self.output_name_replacement = output_name_replacement.or(self.output_name_replacement);
        self.compiler_candidates = compiler_candidates.or(self.compiler_candidates);
        self.compiler_program = compiler_program.map(Some).or(self.compiler_program);
        self.download_url = download_url.or(self.download_url);
        self.homepage_url = homepage_url.or(self.homepage_url);
        self.issues_url = issues_url.or(self.issues_url);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_root` is missing.
    pub fn build(self) -> crate::release::Result<ReleaseSettings> {
        use crate::release::error::Context;

        let project_root = self.project_root.context("project_root is required")?;
        let product_name = self
            .product_name
            .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string());

        let executable = self
            .executable
            .unwrap_or_else(|| default_executable(&product_name, cfg!(target_os = "windows")));

        Ok(ReleaseSettings {
            build_command: self
                .build_command
                .unwrap_or_else(|| vec!["python".to_string(), "build.py".to_string()]),
            executable,
            installer_template: self
                .installer_template
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE)),
            installer_output_dir: self
                .installer_output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            installer_extension: self
                .installer_extension
                .unwrap_or_else(|| DEFAULT_INSTALLER_EXTENSION.to_string()),
            version_placeholder: self
                .version_placeholder
                .unwrap_or_else(|| DEFAULT_VERSION_PLACEHOLDER.to_string()),
            version_replacement: self
                .version_replacement
                .unwrap_or_else(|| DEFAULT_VERSION_REPLACEMENT.to_string()),
            output_name_placeholder: self
                .output_name_placeholder
                .unwrap_or_else(|| DEFAULT_OUTPUT_NAME_PLACEHOLDER.to_string()),
            output_name_replacement: self
                .output_name_replacement
                .unwrap_or_else(|| DEFAULT_OUTPUT_NAME_REPLACEMENT.to_string()),
            compiler_candidates: self.compiler_candidates.unwrap_or_else(|| {
                DEFAULT_COMPILER_CANDIDATES
                    .iter()
                    .map(PathBuf::from)
                    .collect()
            }),
            compiler_program: self
                .compiler_program
                .unwrap_or_else(|| Some(DEFAULT_COMPILER_PROGRAM.to_string())),
            download_url: self
                .download_url
                .unwrap_or_else(|| DEFAULT_DOWNLOAD_URL.to_string()),
            homepage_url: self
                .homepage_url
                .unwrap_or_else(|| DEFAULT_HOMEPAGE_URL.to_string()),
            issues_url: self
                .issues_url
                .unwrap_or_else(|| DEFAULT_ISSUES_URL.to_string()),
            product_name,
            project_root,
        })
    }
}

/// `dist/<Product>`, with `.exe` appended for Windows builds.
fn default_executable(product_name: &str, windows: bool) -> PathBuf {
    let file_name = if windows {
        format!("{product_name}.exe")
    } else {
        product_name.to_string()
    };
    PathBuf::from("dist").join(file_name)
}
