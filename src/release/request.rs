//! What to release: a version and a release kind.

use std::{fmt, str::FromStr};

use super::{error::Result, version::predecessor_version};

/// Incremental patch or standalone full installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseKind {
    /// Update package applied over a specific prior version.
    #[default]
    Patch,
    /// Installer usable without a prior version.
    Full,
}

impl ReleaseKind {
    /// Every accepted CLI spelling.
    pub const VALUES: [&'static str; 2] = ["patch", "full"];

    /// Suffix of the installer's output base name.
    pub fn installer_suffix(self) -> &'static str {
        match self {
            ReleaseKind::Patch => "Patch",
            ReleaseKind::Full => "Setup",
        }
    }

    /// Lowercase name as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseKind::Patch => "patch",
            ReleaseKind::Full => "full",
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "patch" => Ok(ReleaseKind::Patch),
            "full" => Ok(ReleaseKind::Full),
            other => Err(format!(
                "Invalid release kind '{}'. Must be one of: {}",
                other,
                Self::VALUES.join(", ")
            )),
        }
    }
}

/// Immutable input for one pipeline run.
///
/// The version is used as text and split on `.`; its shape is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    version: String,
    kind: ReleaseKind,
    from_version: Option<String>,
}

impl ReleaseRequest {
    /// Creates a request for `version` of the given kind.
    pub fn new(version: impl Into<String>, kind: ReleaseKind) -> Self {
        Self {
            version: version.into(),
            kind,
            from_version: None,
        }
    }

    /// Pins the predecessor of a patch release instead of deriving it.
    pub fn with_from_version(mut self, from_version: impl Into<String>) -> Self {
        self.from_version = Some(from_version.into());
        self
    }

    /// Target version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Release kind.
    pub fn kind(&self) -> ReleaseKind {
        self.kind
    }

    /// Version a patch applies over; always `None` for full releases.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidVersion`](super::Error::InvalidVersion) when a patch has
    /// no explicit predecessor and one cannot be derived from the version.
    pub fn predecessor(&self) -> Result<Option<String>> {
        match (self.kind, &self.from_version) {
            (ReleaseKind::Full, _) => Ok(None),
            (ReleaseKind::Patch, Some(explicit)) => Ok(Some(explicit.clone())),
            (ReleaseKind::Patch, None) => predecessor_version(&self.version).map(Some),
        }
    }
}
