//! Line evaluation.
//!
//! The [`Evaluator`] turns one input line into a command run: split on
//! whitespace, resolve the command, bind its arguments, invoke the handler.
//! It never touches the caller's state; a successful run returns the state
//! to continue with and a failed run returns only the error.

use crate::args::BoundArgs;
use crate::commands::{CommandOutput, CommandRegistry};
use crate::error::Result;
use crate::session::SessionState;

/// Output and replacement state of one evaluated line.
pub type Evaluation = CommandOutput;

/// Evaluates lines against a fixed set of commands.
#[derive(Debug)]
pub struct Evaluator {
    registry: CommandRegistry,
}

impl Evaluator {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Evaluate `line` against `state`.
    ///
    /// An empty or blank line is a no-op. Commands that declare no arguments
    /// ignore any trailing tokens.
    ///
    /// # Errors
    ///
    /// `UnknownCommand`, any binding error, or the handler's own error, all
    /// unchanged.
    pub fn evaluate(&self, line: &str, state: &SessionState) -> Result<Evaluation> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(Evaluation::unchanged("", state));
        };

        let command = self.registry.resolve(name)?;
        tracing::debug!("evaluating '{}' with {} token(s)", name, rest.len());

        if command.args().is_empty() {
            return command.execute(&BoundArgs::new(), state);
        }

        let args = command.bind(rest)?;
        command.execute(&args, state)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(CommandRegistry::with_builtins())
    }
}
