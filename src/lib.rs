//! Ares - an interactive line-oriented command shell.
//!
//! Ares reads a line, finds the registered command named by its first word,
//! binds the remaining words to that command's declared arguments and runs
//! the command's handler against the session state.
//!
//! # Modules
//!
//! - [`args`] - Argument specifications, lookup index and the binder
//! - [`cli`] - Process arguments and binary wiring
//! - [`commands`] - Command definitions, registry and builtins
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`evaluator`] - Line evaluation
//! - [`session`] - Session state and path resolution
//! - [`shell`] - The interactive loop
//! - [`ui`] - Terminal styling
//!
//! # Example
//!
//! ```
//! use ares::{Evaluator, SessionState};
//!
//! let evaluator = Evaluator::default();
//! let state = SessionState::new("/");
//!
//! let evaluation = evaluator.evaluate("pwd", &state).unwrap();
//! assert_eq!(evaluation.output, "/");
//!
//! // Failed lines leave the caller's state alone.
//! assert!(evaluator.evaluate("ls --zzz", &state).is_err());
//! ```

pub mod args;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod session;
pub mod shell;
pub mod ui;

pub use error::{AresError, Result};
pub use evaluator::{Evaluation, Evaluator};
pub use session::SessionState;
