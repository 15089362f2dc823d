//! Session state threaded through successive evaluations.
//!
//! [`SessionState`] is an immutable value. Handlers never change the state
//! they are given; a successful command returns a replacement and the caller
//! decides whether to commit it.

pub mod path;

pub use path::resolve_path;

use std::path::{Path, PathBuf};

/// Context carried from one command line to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    cwd: PathBuf,
}

impl SessionState {
    /// Create a state rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// A new state with a different working directory.
    pub fn with_cwd(&self, cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Resolve `target` against the working directory.
    pub fn resolve(&self, target: &str) -> PathBuf {
        resolve_path(&self.cwd, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_cwd_leaves_original_untouched() {
        let state = SessionState::new("/home/user");
        let next = state.with_cwd("/home");
        assert_eq!(state.cwd(), Path::new("/home/user"));
        assert_eq!(next.cwd(), Path::new("/home"));
    }

    #[test]
    fn resolve_uses_cwd() {
        let state = SessionState::new("/home/user");
        assert_eq!(state.resolve(".."), PathBuf::from("/home"));
        assert_eq!(state.resolve("docs"), PathBuf::from("/home/user/docs"));
    }
}
