//! CLI argument definitions.
//!
//! This module defines the process arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// Ares - an interactive line-oriented command shell.
#[derive(Debug, Parser)]
#[command(name = "ares")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.ares/config.yml)
    #[arg(long, env = "ARES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory to start the session in
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Evaluate one line and exit instead of starting the prompt
    #[arg(short, long, value_name = "LINE")]
    pub command: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
