//! Literal placeholder substitution for the installer script.
//!
//! The installer template is not a templating language: known placeholder
//! strings are swapped for their replacements verbatim. A placeholder that no
//! longer appears in the text is left alone and shows up in the
//! [`SubstitutionReport`] with a count of zero.
//!
//! Substitution works on raw bytes, so scripts saved in a legacy code page
//! keep every byte outside the placeholders.

use std::path::Path;

use memchr::memmem;

use super::error::{ErrorExt, Result};

/// Ordered `(placeholder, replacement)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    pairs: Vec<(String, String)>,
}

impl Substitutions {
    /// Creates an empty substitution list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pair; pairs apply in insertion order.
    pub fn with(mut self, placeholder: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.pairs.push((placeholder.into(), replacement.into()));
        self
    }

    /// Applies every pair to `text`, returning the new bytes and match counts.
    ///
    /// Each pair sees the output of the previous one. Empty placeholders
    /// never match.
    pub fn apply(&self, text: impl AsRef<[u8]>) -> (Vec<u8>, SubstitutionReport) {
        let mut output = text.as_ref().to_vec();
        let mut counts = Vec::with_capacity(self.pairs.len());

        for (placeholder, replacement) in &self.pairs {
            let count = if placeholder.is_empty() {
                0
            } else {
                let (replaced, count) =
                    replace_all(&output, placeholder.as_bytes(), replacement.as_bytes());
                output = replaced;
                count
            };
            counts.push((placeholder.clone(), count));
        }

        (output, SubstitutionReport { counts })
    }
}

/// Replaces every non-overlapping occurrence of `needle`.
fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> (Vec<u8>, usize) {
    let mut output = Vec::with_capacity(haystack.len());
    let mut last = 0;
    let mut count = 0;

    for start in memmem::find_iter(haystack, needle) {
        output.extend_from_slice(&haystack[last..start]);
        output.extend_from_slice(replacement);
        last = start + needle.len();
        count += 1;
    }
    output.extend_from_slice(&haystack[last..]);

    (output, count)
}

/// Number of replacements made for each placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionReport {
    counts: Vec<(String, usize)>,
}

impl SubstitutionReport {
    /// Replacement count for `placeholder`, `None` if it was not in the list.
    pub fn count_for(&self, placeholder: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(p, _)| p == placeholder)
            .map(|(_, count)| *count)
    }

    /// Placeholders that matched nothing.
    pub fn unmatched(&self) -> impl Iterator<Item = &str> {
        self.counts
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(p, _)| p.as_str())
    }

    /// Total replacements across all placeholders.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// Rewrites `path` in place with `substitutions` applied.
///
/// The whole file is read, substituted in memory, then written back once.
pub async fn patch_file(path: &Path, substitutions: &Substitutions) -> Result<SubstitutionReport> {
    let content = tokio::fs::read(path)
        .await
        .fs_context("reading installer template", path)?;

    let (patched, report) = substitutions.apply(&content);

    tokio::fs::write(path, patched)
        .await
        .fs_context("writing installer template", path)?;

    log::debug!(
        "Patched {} ({} replacement(s))",
        path.display(),
        report.total()
    );

    Ok(report)
}
