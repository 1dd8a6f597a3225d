//! Configuration for a release run.
//!
//! Every path, command and literal token the pipeline touches lives in
//! [`ReleaseSettings`], built with [`ReleaseSettingsBuilder`] and optionally
//! overlaid from a `release.toml` file ([`FileConfig`]).

mod builder;
mod core;
mod file;

pub use builder::ReleaseSettingsBuilder;
pub use core::ReleaseSettings;
pub use file::{CONFIG_FILE_NAME, FileConfig};
