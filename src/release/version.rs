//! Version string helpers.

use super::error::{Error, Result};

/// Derives the version a patch release applies over.
///
/// The last dot-separated component is decremented by one: `1.0.5` → `1.0.4`.
/// There is no borrowing across components, so a last component of `0` is
/// rejected, as is one that is not an unsigned integer.
pub fn predecessor_version(version: &str) -> Result<String> {
    let invalid = |reason: &str| Error::InvalidVersion {
        version: version.to_string(),
        reason: reason.to_string(),
    };

    let (head, last) = match version.rsplit_once('.') {
        Some((head, last)) => (Some(head), last),
        None => (None, version),
    };

    let number: u64 = last
        .parse()
        .map_err(|_| invalid("last component is not a number; pass --from-version"))?;
    let previous = number
        .checked_sub(1)
        .ok_or_else(|| invalid("last component is 0; pass --from-version"))?;

    Ok(match head {
        Some(head) => format!("{head}.{previous}"),
        None => previous.to_string(),
    })
}
