//! Interactive shell host and session bootstrap.

pub mod repl;

pub use repl::{Shell, EXIT_COMMAND};

use std::path::{Path, PathBuf};

use crate::config::ShellConfig;

/// Pick the directory a new session starts in.
///
/// Precedence: explicit override, then `start_dir` from config, then the
/// home directory, then `.`.
pub fn initial_directory(explicit: Option<&Path>, config: &ShellConfig) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.start_dir.clone())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
