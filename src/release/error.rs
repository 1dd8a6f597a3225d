//! Error types for release pipeline operations.
//!
//! Every phase reports failures through [`Error`]. The variants follow the
//! failure taxonomy of the pipeline: external tools that could not be started
//! or exited nonzero, artifacts that are missing after a step claimed success,
//! and plain filesystem failures annotated with what was being attempted.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::artifact::ArtifactKind;

/// Result type alias for release operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by release pipeline phases.
#[derive(Debug, Error)]
pub enum Error {
    /// An external command could not be spawned.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Rendered command line
        command: String,
        /// Spawn error
        #[source]
        error: io::Error,
    },

    /// An external command ran but reported failure.
    #[error("`{command}` exited with {}", describe_exit(.code))]
    ToolExited {
        /// Rendered command line
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },

    /// An expected artifact is absent on disk.
    #[error("{kind} not found: {}", .path.display())]
    MissingArtifact {
        /// Which artifact was expected
        kind: ArtifactKind,
        /// Where it was expected
        path: PathBuf,
    },

    /// Filesystem operation failed.
    #[error("{context} ({}): {source}", .path.display())]
    Fs {
        /// Operation being attempted
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// IO error without path context.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// A version string cannot be used for the requested operation.
    #[error("invalid version `{version}`: {reason}")]
    InvalidVersion {
        /// Offending version string
        version: String,
        /// Why it was rejected
        reason: String,
    },

    /// Release configuration file is unreadable or malformed.
    #[error("invalid release configuration {}: {reason}", .path.display())]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// Parse failure
        reason: String,
    },

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Release notes template errors.
    #[error("template error: {0}")]
    Template(String),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Attaches filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Turns a missing value into a [`Error::GenericError`].
pub trait Context<T> {
    /// Returns the contained value or an error carrying `msg`.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::release::Error::GenericError(format!($($arg)*)))
    };
}
