//! Command definitions.
//!
//! This module provides the core command types:
//! - [`CommandHandler`] trait implemented by every command's logic
//! - [`CommandOutput`] for the output and replacement state of a run
//! - [`CommandSpec`] pairing a name and argument contract with a handler

use std::fmt;

use crate::args::{extract, ArgumentIndex, ArgumentSpec, BoundArgs, Collision};
use crate::error::Result;
use crate::session::SessionState;

/// The executable part of a command.
///
/// Handlers receive the bound arguments and a read-only view of the current
/// state. On success they return the state the session should continue
/// with; on failure the caller keeps the state it already has.
///
/// Any `Fn(&BoundArgs, &SessionState) -> Result<CommandOutput>` closure is a
/// handler.
pub trait CommandHandler: Send + Sync {
    /// Run the command.
    fn execute(&self, args: &BoundArgs, state: &SessionState) -> Result<CommandOutput>;
}

impl<F> CommandHandler for F
where
    F: Fn(&BoundArgs, &SessionState) -> Result<CommandOutput> + Send + Sync,
{
    fn execute(&self, args: &BoundArgs, state: &SessionState) -> Result<CommandOutput> {
        self(args, state)
    }
}

/// Result of a successful command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text to show the user. May be empty.
    pub output: String,

    /// State the session continues with.
    pub state: SessionState,
}

impl CommandOutput {
    /// Output paired with a new state.
    pub fn new(output: impl Into<String>, state: SessionState) -> Self {
        Self {
            output: output.into(),
            state,
        }
    }

    /// Output that leaves the session where it was.
    pub fn unchanged(output: impl Into<String>, state: &SessionState) -> Self {
        Self::new(output, state.clone())
    }
}

/// A registered command: its contract plus its handler.
pub struct CommandSpec {
    name: String,
    description: String,
    usage: String,
    args: Vec<ArgumentSpec>,
    handler: Box<dyn CommandHandler>,
}

impl CommandSpec {
    /// Create a command with no arguments.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
        handler: impl CommandHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: usage.into(),
            args: Vec::new(),
            handler: Box::new(handler),
        }
    }

    /// Declare an argument. Declaration order is significant for positional
    /// slots and for name collisions.
    pub fn with_arg(mut self, arg: ArgumentSpec) -> Self {
        self.args.push(arg);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn args(&self) -> &[ArgumentSpec] {
        &self.args
    }

    /// Bind the tokens after the command name.
    pub fn bind<S: AsRef<str>>(&self, tokens: &[S]) -> Result<BoundArgs> {
        extract(tokens, &self.args)
    }

    /// Invoke the handler.
    pub fn execute(&self, args: &BoundArgs, state: &SessionState) -> Result<CommandOutput> {
        self.handler.execute(args, state)
    }

    /// Named declarations that are unreachable through a shadowed name or
    /// shorthand. Positional slots are never looked up by key.
    pub fn collisions(&self) -> Vec<Collision> {
        ArgumentIndex::build(self.args.iter().filter(|a| !a.is_positional()))
            .collisions()
            .to_vec()
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AresError;

    fn echo_spec() -> CommandSpec {
        CommandSpec::new(
            "echo",
            "Print the message argument.",
            "echo [message]",
            |args: &BoundArgs, state: &SessionState| -> Result<CommandOutput> {
                let message = args.value("[message]").unwrap_or_default();
                Ok(CommandOutput::unchanged(message, state))
            },
        )
        .with_arg(ArgumentSpec::positional("[message]").with_default("hi"))
    }

    #[test]
    fn closure_handler_executes() {
        let spec = echo_spec();
        let state = SessionState::new("/");
        let args = spec.bind(&["hello"]).unwrap();
        let out = spec.execute(&args, &state).unwrap();
        assert_eq!(out.output, "hello");
        assert_eq!(out.state, state);
    }

    #[test]
    fn bind_uses_declared_defaults() {
        let args = echo_spec().bind::<&str>(&[]).unwrap();
        assert_eq!(args.value("[message]"), Some("hi"));
    }

    #[test]
    fn bind_rejects_undeclared_flag() {
        let err = echo_spec().bind(&["--loud"]).unwrap_err();
        assert!(matches!(err, AresError::InvalidArgument { .. }));
    }

    #[test]
    fn collisions_reports_shadowed_shorthand() {
        let spec = echo_spec()
            .with_arg(ArgumentSpec::flag("all").with_shorthand("a"))
            .with_arg(ArgumentSpec::flag("append").with_shorthand("a"));
        let collisions = spec.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].shadowed, "append");
    }

    #[test]
    fn collisions_ignore_positional_shorthand() {
        let spec = echo_spec()
            .with_arg(ArgumentSpec::positional("[dir]").with_shorthand("a"))
            .with_arg(ArgumentSpec::flag("all").with_shorthand("a"));
        assert!(spec.collisions().is_empty());
    }

    #[test]
    fn debug_omits_handler() {
        let rendered = format!("{:?}", echo_spec());
        assert!(rendered.contains("echo"));
        assert!(rendered.contains(".."));
    }
}
