//! `cd` - change the working directory.

use crate::args::{ArgumentSpec, BoundArgs};
use crate::commands::command::{CommandHandler, CommandOutput, CommandSpec};
use crate::error::{AresError, Result};
use crate::session::SessionState;

use super::DIRECTORY;

/// Moves the session to another existing directory.
pub struct ChangeDirectory;

impl ChangeDirectory {
    /// The `cd` command definition.
    pub fn spec() -> CommandSpec {
        CommandSpec::new(
            "cd",
            "Change the shell working directory.",
            "cd [directory]",
            ChangeDirectory,
        )
        .with_arg(ArgumentSpec::positional(DIRECTORY).with_help("Directory to change into"))
    }
}

impl CommandHandler for ChangeDirectory {
    fn execute(&self, args: &BoundArgs, state: &SessionState) -> Result<CommandOutput> {
        let target = args
            .value(DIRECTORY)
            .ok_or_else(|| AresError::MissingPositional {
                name: DIRECTORY.to_string(),
            })?;

        let path = state.resolve(target);
        if !path.is_dir() {
            return Err(AresError::handler(
                "cd",
                format!("directory does not exist: {}", path.display()),
            ));
        }

        tracing::debug!("cd {} -> {}", state.cwd().display(), path.display());
        Ok(CommandOutput::new(
            path.display().to_string(),
            state.with_cwd(path),
        ))
    }
}
