//! Installer compiler discovery.
//!
//! The compiler is looked up at run time rather than assumed. Resolution is a
//! capability behind [`ToolResolver`] so callers can substitute their own.

use std::path::PathBuf;

/// Locates an external tool.
pub trait ToolResolver: Send + Sync {
    /// Path to the tool, or `None` when it is not available.
    fn locate(&self) -> Option<PathBuf>;
}

/// A fixed answer: `Some(path)` always resolves to `path`, `None` never resolves.
impl ToolResolver for Option<PathBuf> {
    fn locate(&self) -> Option<PathBuf> {
        self.clone()
    }
}

/// Probes an ordered list of candidate paths, then optionally `PATH`.
#[derive(Debug, Clone, Default)]
pub struct CandidatePathResolver {
    candidates: Vec<PathBuf>,
    program: Option<String>,
}

impl CandidatePathResolver {
    /// Creates a resolver over `candidates`, checked in order.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            program: None,
        }
    }

    /// Falls back to searching `PATH` for `program` when no candidate exists.
    pub fn with_path_lookup(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }
}

impl ToolResolver for CandidatePathResolver {
    fn locate(&self) -> Option<PathBuf> {
        if let Some(found) = self.candidates.iter().find(|path| path.is_file()) {
            log::debug!("Found installer compiler at: {}", found.display());
            return Some(found.clone());
        }

        let program = self.program.as_deref()?;
        match which::which(program) {
            Ok(path) => {
                log::debug!("Found {} in PATH at: {}", program, path.display());
                Some(path)
            }
            Err(e) => {
                log::debug!("{} not found in PATH: {}", program, e);
                None
            }
        }
    }
}
