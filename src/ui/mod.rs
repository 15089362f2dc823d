//! Terminal styling for the shell host.

pub mod theme;

pub use theme::{should_use_colors, ShellTheme};
