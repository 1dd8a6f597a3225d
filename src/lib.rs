//! Build-and-release orchestration for a desktop application.
//!
//! One run takes a version and release kind through four steps:
//! - build the application executable with an external build command
//! - patch the Inno Setup script and compile the installer
//! - compute the update manifest entry (URL, SHA-256 checksum, size, date)
//! - write release notes next to the installer
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod release;

// Re-export commonly used types
pub use error::{CliError, ReleaseError, Result};
pub use release::{ReleaseKind, ReleasePipeline, ReleaseRequest, ReleaseSettings};
