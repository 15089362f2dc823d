//! `pwd` - print the working directory.

use crate::args::BoundArgs;
use crate::commands::command::{CommandHandler, CommandOutput, CommandSpec};
use crate::error::Result;
use crate::session::SessionState;

/// Prints the session working directory.
pub struct PrintDirectory;

impl PrintDirectory {
    /// The `pwd` command definition.
    pub fn spec() -> CommandSpec {
        CommandSpec::new(
            "pwd",
            "Print the name of the current working directory.",
            "pwd",
            PrintDirectory,
        )
    }
}

impl CommandHandler for PrintDirectory {
    fn execute(&self, _args: &BoundArgs, state: &SessionState) -> Result<CommandOutput> {
        Ok(CommandOutput::unchanged(
            state.cwd().display().to_string(),
            state,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_cwd() {
        let state = SessionState::new("/srv/data");
        let out = PrintDirectory::spec()
            .execute(&BoundArgs::new(), &state)
            .unwrap();
        assert_eq!(out.output, "/srv/data");
        assert_eq!(out.state, state);
    }
}
