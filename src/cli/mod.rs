//! Command-line interface for the `ares` binary.
//!
//! - [`args`] - Process arguments using clap derive macros
//! - [`run`] - Wires configuration, session state and the shell together

pub mod args;

pub use args::Cli;

use std::io;

use crate::config::load_config;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::session::SessionState;
use crate::shell::{initial_directory, Shell};
use crate::ui::{should_use_colors, ShellTheme};

/// Build the shell described by `cli`.
pub fn build_shell(cli: &Cli) -> Result<Shell> {
    let config = load_config(cli.config.as_deref())?;
    let cwd = initial_directory(cli.dir.as_deref(), &config);
    tracing::debug!("starting session in {}", cwd.display());

    let colors = !cli.no_color && should_use_colors();
    console::set_colors_enabled(colors);

    Ok(Shell::new(
        Evaluator::default(),
        SessionState::new(cwd),
        config,
        ShellTheme::for_colors(colors),
    ))
}

/// Run the binary: one line with `--command`, otherwise the interactive loop
/// over stdin.
pub fn run(cli: &Cli) -> Result<()> {
    let mut shell = build_shell(cli)?;

    if let Some(line) = &cli.command {
        let output = shell.execute_line(line)?;
        if !output.is_empty() {
            println!("{}", output);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    shell.run(stdin.lock(), io::stdout().lock())
}
