//! Artifact checksum calculation.
//!
//! Installers can be large, so files are streamed through SHA-256 in fixed
//! 8KB chunks rather than read whole.

use std::path::Path;

use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

use super::error::{ErrorExt, Result};

/// Read size used when streaming a file through the hasher.
pub const CHUNK_SIZE: usize = 8192;

/// Prefix carried by every manifest checksum.
pub const CHECKSUM_PREFIX: &str = "sha256:";

/// Calculates the manifest checksum of a file: `sha256:<64 lowercase hex>`.
///
/// # Errors
///
/// Returns [`Error::Fs`](super::Error::Fs) if the file cannot be opened or read.
pub async fn calculate_checksum(path: &Path) -> Result<String> {
    let digest = calculate_sha256(path).await?;
    Ok(format!("{CHECKSUM_PREFIX}{digest}"))
}

/// Calculates the hex-encoded SHA-256 of a file.
pub async fn calculate_sha256(path: &Path) -> Result<String> {
    calculate_sha256_chunked(path, CHUNK_SIZE).await
}

/// Strips the `sha256:` prefix, leaving the bare hex digest.
pub fn checksum_hex(checksum: &str) -> &str {
    checksum.strip_prefix(CHECKSUM_PREFIX).unwrap_or(checksum)
}

async fn calculate_sha256_chunked(path: &Path, chunk_size: usize) -> Result<String> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
