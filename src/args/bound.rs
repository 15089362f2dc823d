//! Arguments bound for a single evaluation.

use super::spec::ArgumentSpec;

/// One satisfied argument produced by the binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundArgument {
    pub name: String,
    pub shorthand: Option<String>,
    /// Raw token (or positional default). Empty for flags.
    pub value: String,
    pub is_flag: bool,
}

impl BoundArgument {
    /// Bind `spec` to `value`.
    pub fn from_spec(spec: &ArgumentSpec, value: impl Into<String>) -> Self {
        Self {
            name: spec.name().to_string(),
            shorthand: spec.shorthand().map(str::to_string),
            value: value.into(),
            is_flag: spec.is_flag(),
        }
    }

    fn matches(&self, key: &str) -> bool {
        self.name == key || self.shorthand.as_deref() == Some(key)
    }
}

/// Ordered arguments handed to a command handler.
///
/// Lookups accept either the canonical name or the shorthand. An argument
/// that was not supplied is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundArgs {
    args: Vec<BoundArgument>,
}

impl BoundArgs {
    /// Create an empty set of bound arguments.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, arg: BoundArgument) {
        self.args.push(arg);
    }

    /// First bound argument addressed by `key`.
    pub fn get(&self, key: &str) -> Option<&BoundArgument> {
        self.args.iter().find(|a| a.matches(key))
    }

    /// Value bound to `key`, if it was supplied.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|a| a.value.as_str())
    }

    /// Whether `key` was supplied. This is how handlers read flags.
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate in binding order.
    pub fn iter(&self) -> impl Iterator<Item = &BoundArgument> {
        self.args.iter()
    }

    /// Get the number of bound arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Consume into the underlying list.
    pub fn into_vec(self) -> Vec<BoundArgument> {
        self.args
    }
}

impl From<Vec<BoundArgument>> for BoundArgs {
    fn from(args: Vec<BoundArgument>) -> Self {
        Self { args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoundArgs {
        let all = ArgumentSpec::flag("all").with_shorthand("a");
        let dir = ArgumentSpec::positional("[directory]");
        vec![
            BoundArgument::from_spec(&all, ""),
            BoundArgument::from_spec(&dir, "/tmp"),
        ]
        .into()
    }

    #[test]
    fn lookup_by_name_or_shorthand() {
        let args = sample();
        assert!(args.is_present("all"));
        assert!(args.is_present("a"));
        assert_eq!(args.value("[directory]"), Some("/tmp"));
    }

    #[test]
    fn absent_argument_is_none() {
        let args = sample();
        assert!(!args.is_present("long"));
        assert_eq!(args.value("long"), None);
    }

    #[test]
    fn from_spec_copies_flag_and_shorthand() {
        let args = sample();
        let all = args.get("all").unwrap();
        assert!(all.is_flag);
        assert_eq!(all.shorthand.as_deref(), Some("a"));
        assert!(all.value.is_empty());
    }

    #[test]
    fn preserves_order() {
        let names: Vec<_> = sample().iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, vec!["all", "[directory]"]);
    }
}
