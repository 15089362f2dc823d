//! Error types for shell operations.
//!
//! This module defines [`AresError`], the single error type returned by the
//! binder, the registry, the evaluator and the command handlers, plus a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Binding failures carry the offending token or argument name verbatim
//! - Handlers report domain failures through [`AresError::Handler`]
//! - No variant is fatal to the read loop; the prior session state stays
//!   authoritative whenever an error is returned

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for shell operations.
#[derive(Debug, Error)]
pub enum AresError {
    /// The first token does not name a registered command.
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// A dash-prefixed token matched no declared name or shorthand, or a
    /// bare token arrived after every positional slot was filled.
    #[error("invalid argument: {token}")]
    InvalidArgument { token: String },

    /// A value argument was given without a following value token.
    #[error("invalid argument: no data provided to non-flag argument '{name}'")]
    MissingValue { name: String },

    /// A positional slot received no token and declares no default.
    #[error("missing required argument: {name}")]
    MissingPositional { name: String },

    /// A command's own logic failed.
    #[error("{command}: {message}")]
    Handler { command: String, message: String },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AresError {
    /// Build a handler error for the named command.
    pub fn handler(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            command: command.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, AresError>;
