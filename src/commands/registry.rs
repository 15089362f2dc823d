//! Command registry.
//!
//! The [`CommandRegistry`] maps command names to their [`CommandSpec`]. It is
//! built once at startup, handed to the [`Evaluator`](crate::evaluator::Evaluator)
//! and only read afterwards.

use std::collections::HashMap;

use super::builtins::{ChangeDirectory, Help, HelpEntry, ListDirectory, PrintDirectory};
use super::command::CommandSpec;
use crate::error::{AresError, Result};

/// Registry of the commands a shell can dispatch.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    by_name: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all builtin commands.
    ///
    /// `help` is registered last so its summary covers every other builtin.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(ChangeDirectory::spec());
        registry.register(ListDirectory::spec());
        registry.register(PrintDirectory::spec());

        let entries = registry.iter().map(HelpEntry::from_spec).collect();
        registry.register(Help::spec(entries));
        registry
    }

    /// Register a command.
    ///
    /// The first command registered under a name keeps it; later ones are
    /// dropped with a warning. Argument declarations that shadow each other
    /// are logged but still registered.
    pub fn register(&mut self, spec: CommandSpec) {
        if self.by_name.contains_key(spec.name()) {
            tracing::warn!(
                "command '{}' is already registered, ignoring duplicate",
                spec.name()
            );
            return;
        }

        for collision in spec.collisions() {
            tracing::warn!("command '{}': {}", spec.name(), collision);
        }

        self.by_name.insert(spec.name().to_string(), self.commands.len());
        self.commands.push(spec);
    }

    /// Get a command by name.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.by_name.get(name).map(|&i| &self.commands[i])
    }

    /// Get a command by name, failing with `UnknownCommand`.
    pub fn resolve(&self, name: &str) -> Result<&CommandSpec> {
        self.get(name).ok_or_else(|| AresError::UnknownCommand {
            name: name.to_string(),
        })
    }

    /// Iterate over commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Get the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
