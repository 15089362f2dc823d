//! `help` - describe the registered commands.

use crate::args::{ArgumentSpec, BoundArgs};
use crate::commands::command::{CommandHandler, CommandOutput, CommandSpec};
use crate::error::{AresError, Result};
use crate::session::SessionState;

const COMMAND: &str = "command";

/// What `help` knows about one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub name: String,
    pub usage: String,
    pub description: String,
    /// `(display name, help text)` per declared argument.
    pub arguments: Vec<(String, String)>,
}

impl HelpEntry {
    pub fn from_spec(spec: &CommandSpec) -> Self {
        Self::build(spec.name(), spec.usage(), spec.description(), spec.args())
    }

    fn build(name: &str, usage: &str, description: &str, args: &[ArgumentSpec]) -> Self {
        Self {
            name: name.to_string(),
            usage: usage.to_string(),
            description: description.to_string(),
            arguments: args
                .iter()
                .map(|a| (a.display_name(), a.help().unwrap_or_default().to_string()))
                .collect(),
        }
    }

    fn render(&self) -> String {
        let mut lines = vec![format!("usage: {}", self.usage), self.description.clone()];
        if !self.arguments.is_empty() {
            lines.push(String::new());
            lines.push("arguments:".to_string());
            for (name, help) in &self.arguments {
                lines.push(format!("  {:<24}{}", name, help).trim_end().to_string());
            }
        }
        lines.join("\n")
    }
}

/// Prints a summary of every command, or the details of one.
///
/// The entries are a snapshot taken when the registry is built; `help`
/// itself is included.
pub struct Help {
    entries: Vec<HelpEntry>,
}

impl Help {
    fn arguments() -> Vec<ArgumentSpec> {
        vec![ArgumentSpec::value(COMMAND)
            .with_shorthand("c")
            .with_help("Show details for one command")]
    }

    /// The `help` command definition, describing `entries` plus itself.
    pub fn spec(mut entries: Vec<HelpEntry>) -> CommandSpec {
        let description = "Display information about builtin commands.";
        let usage = "help [flags]";
        let args = Self::arguments();
        entries.push(HelpEntry::build("help", usage, description, &args));

        args.into_iter().fold(
            CommandSpec::new("help", description, usage, Help { entries }),
            CommandSpec::with_arg,
        )
    }
}

impl CommandHandler for Help {
    fn execute(&self, args: &BoundArgs, state: &SessionState) -> Result<CommandOutput> {
        let output = match args.value(COMMAND) {
            Some(name) => self
                .entries
                .iter()
                .find(|e| e.name == name)
                .map(HelpEntry::render)
                .ok_or_else(|| AresError::handler("help", format!("no such command: {name}")))?,
            None => self
                .entries
                .iter()
                .map(|e| format!("{:<24}{}", e.usage, e.description))
                .collect::<Vec<_>>()
                .join("\n"),
        };

        Ok(CommandOutput::unchanged(output, state))
    }
}
