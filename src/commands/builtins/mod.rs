//! Builtin commands.
//!
//! Each builtin is a unit struct implementing
//! [`CommandHandler`](crate::commands::CommandHandler) with a `spec()`
//! constructor that declares its name, usage and arguments.

pub mod cd;
pub mod help;
pub mod ls;
pub mod pwd;

pub use cd::ChangeDirectory;
pub use help::{Help, HelpEntry};
pub use ls::ListDirectory;
pub use pwd::PrintDirectory;

/// Display name of the positional directory argument shared by `cd` and `ls`.
pub const DIRECTORY: &str = "[directory]";
