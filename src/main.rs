//! Release Builder - build-and-release pipeline for the desktop application.
//!
//! This binary builds the executable, packages the installer, prints the
//! update manifest entry and writes release notes, failing fast on any step.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match release_builder::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
