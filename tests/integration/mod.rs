//! Integration tests for the release pipeline and CLI
//!
//! Shell commands stand in for the application build and the installer
//! compiler, so these run on Unix only.

#![cfg(unix)]

mod helpers;
mod test_cli;
mod test_pipeline;
