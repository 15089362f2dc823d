//! Commands and their registry.
//!
//! - [`command`] - [`CommandSpec`], [`CommandHandler`], [`CommandOutput`]
//! - [`registry`] - [`CommandRegistry`] name lookup
//! - [`builtins`] - `cd`, `ls`, `pwd` and `help`

pub mod builtins;
pub mod command;
pub mod registry;

pub use command::{CommandHandler, CommandOutput, CommandSpec};
pub use registry::CommandRegistry;
