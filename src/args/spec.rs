//! Declarative argument specifications.
//!
//! An [`ArgumentSpec`] describes one argument a command accepts. Specs are
//! built once when a command is defined and never change afterwards.
//!
//! # Example
//!
//! ```
//! use ares::args::ArgumentSpec;
//!
//! let all = ArgumentSpec::flag("all").with_shorthand("a");
//! let dir = ArgumentSpec::positional("[directory]").with_default(".");
//!
//! assert!(all.is_flag());
//! assert_eq!(dir.default_value(), Some("."));
//! ```

/// How an argument is addressed and whether it consumes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Presence alone is the signal (`--all`).
    Flag,
    /// Named argument that consumes the following token (`--cmd ls`).
    Value,
    /// Claims a bare token by position.
    Positional,
}

/// Description of one argument a command accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    name: String,
    shorthand: Option<String>,
    kind: ArgumentKind,
    default_value: Option<String>,
    help: Option<String>,
}

impl ArgumentSpec {
    fn new(name: impl Into<String>, kind: ArgumentKind) -> Self {
        Self {
            name: name.into(),
            shorthand: None,
            kind,
            default_value: None,
            help: None,
        }
    }

    /// A boolean-presence argument.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, ArgumentKind::Flag)
    }

    /// A named argument that takes the next token as its value.
    pub fn value(name: impl Into<String>) -> Self {
        Self::new(name, ArgumentKind::Value)
    }

    /// A positional argument, usually named with brackets (`[directory]`).
    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(name, ArgumentKind::Positional)
    }

    /// Add a shorthand alias.
    pub fn with_shorthand(mut self, shorthand: impl Into<String>) -> Self {
        let shorthand = shorthand.into();
        self.shorthand = (!shorthand.is_empty()).then_some(shorthand);
        self
    }

    /// Set the value used when a positional slot receives no token.
    ///
    /// Only positional specs consult their default.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Attach a one-line description shown by `help`.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shorthand(&self) -> Option<&str> {
        self.shorthand.as_deref()
    }

    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    pub fn is_flag(&self) -> bool {
        self.kind == ArgumentKind::Flag
    }

    pub fn is_positional(&self) -> bool {
        self.kind == ArgumentKind::Positional
    }

    /// The declared default, if any and non-empty.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Render the spec the way `help` lists it, e.g. `-a, --all`.
    pub fn display_name(&self) -> String {
        if self.is_positional() {
            return self.name.clone();
        }
        let long = format!("--{}", self.name);
        let rendered = match &self.shorthand {
            Some(short) => format!("-{}, {}", short, long),
            None => long,
        };
        if self.kind == ArgumentKind::Value {
            format!("{} <value>", rendered)
        } else {
            rendered
        }
    }
}
