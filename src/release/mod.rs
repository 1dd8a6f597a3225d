//! Build-and-release pipeline for the desktop application.
//!
//! A run takes a [`ReleaseRequest`] (version plus [`ReleaseKind`]) and a
//! [`ReleaseSettings`] describing the project layout, then:
//!
//! 1. runs the application build and verifies the executable
//! 2. patches the installer script and compiles the installer
//! 3. computes a [`ManifestEntry`] for the update manifest
//! 4. writes release notes next to the installer
//!
//! # Module Organization
//!
//! - [`checksum`] - streamed SHA-256 checksums
//! - [`template`] - literal placeholder substitution
//! - [`tool_detection`] - installer compiler lookup
//! - [`manifest`] - manifest entry derivation
//! - [`notes`] - release notes rendering
//! - [`pipeline`] - step sequencing

mod artifact;
pub mod checksum;
mod command;
mod error;
pub mod manifest;
pub mod notes;
mod phases;
pub mod pipeline;
mod request;
mod settings;
pub mod template;
pub mod tool_detection;
mod version;

pub use artifact::{ArtifactKind, BuildArtifact, InstallerArtifact, VerifiedArtifact, format_size};
pub use command::ExternalCommand;
pub use error::{Context, Error, ErrorExt, Result};
pub use manifest::ManifestEntry;
pub use phases::{build_executable, build_installer};
pub use pipeline::{Phase, PipelineFailure, ReleaseOutcome, ReleasePipeline};
pub use request::{ReleaseKind, ReleaseRequest};
pub use settings::{CONFIG_FILE_NAME, FileConfig, ReleaseSettings, ReleaseSettingsBuilder};
pub use tool_detection::{CandidatePathResolver, ToolResolver};
pub use version::predecessor_version;
