//! Token-to-argument binding.
//!
//! [`extract`] walks the tokens that follow a command name and binds each one
//! to a declared [`ArgumentSpec`]:
//!
//! 1. A token starting with `-` is a name reference. Leading dashes are
//!    stripped and the rest is looked up by name, then by shorthand, among
//!    the non-positional specs. Flags bind with an empty value; value
//!    arguments take the next token verbatim.
//! 2. Any other token fills the next unfilled positional slot.
//! 3. After the walk, unfilled positional slots take their default or fail.
//!
//! Bound arguments come out in consumption order, with defaults appended
//! last in positional declaration order.
//!
//! # Example
//!
//! ```
//! use ares::args::{extract, ArgumentSpec};
//!
//! let specs = vec![
//!     ArgumentSpec::flag("all").with_shorthand("a"),
//!     ArgumentSpec::positional("[directory]").with_default("."),
//! ];
//!
//! let bound = extract(&["-a"], &specs).unwrap();
//! assert!(bound.is_present("all"));
//! assert_eq!(bound.value("[directory]"), Some("."));
//! ```

use super::bound::{BoundArgs, BoundArgument};
use super::index::ArgumentIndex;
use super::spec::ArgumentSpec;
use crate::error::{AresError, Result};

const NAME_PREFIX: char = '-';

/// Bind `tokens` (command name excluded) against `specs`.
///
/// # Errors
///
/// - `InvalidArgument` for an unknown `-name` token, or a bare token with no
///   positional slot left to fill
/// - `MissingValue` when a value argument has no following token
/// - `MissingPositional` when a slot stays empty and has no default
pub fn extract<S: AsRef<str>>(tokens: &[S], specs: &[ArgumentSpec]) -> Result<BoundArgs> {
    let (positional, named): (Vec<&ArgumentSpec>, Vec<&ArgumentSpec>) =
        specs.iter().partition(|spec| spec.is_positional());
    let index = ArgumentIndex::build(named);

    let mut bound = BoundArgs::new();
    let mut filled = 0;
    let mut cursor = 0;

    while cursor < tokens.len() {
        let token = tokens[cursor].as_ref();

        if token.starts_with(NAME_PREFIX) {
            let key = token.trim_start_matches(NAME_PREFIX);
            let spec = index
                .lookup_by_name(key)
                .or_else(|| index.lookup_by_shorthand(key))
                .ok_or_else(|| AresError::InvalidArgument {
                    token: token.to_string(),
                })?;

            if spec.is_flag() {
                bound.push(BoundArgument::from_spec(spec, ""));
                cursor += 1;
                continue;
            }

            let value = tokens
                .get(cursor + 1)
                .map(|v| v.as_ref())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AresError::MissingValue {
                    name: spec.name().to_string(),
                })?;
            bound.push(BoundArgument::from_spec(spec, value));
            cursor += 2;
            continue;
        }

        let spec = positional
            .get(filled)
            .ok_or_else(|| AresError::InvalidArgument {
                token: token.to_string(),
            })?;
        bound.push(BoundArgument::from_spec(spec, token));
        filled += 1;
        cursor += 1;
    }

    for spec in &positional[filled..] {
        let default = spec
            .default_value()
            .ok_or_else(|| AresError::MissingPositional {
                name: spec.name().to_string(),
            })?;
        bound.push(BoundArgument::from_spec(spec, default));
    }

    tracing::debug!("bound {} argument(s) from {} token(s)", bound.len(), tokens.len());

    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(bound: &BoundArgs) -> Vec<(String, String)> {
        bound
            .iter()
            .map(|a| (a.name.clone(), a.value.clone()))
            .collect()
    }

    fn ls_specs() -> Vec<ArgumentSpec> {
        vec![
            ArgumentSpec::positional("[directory]").with_default("."),
            ArgumentSpec::flag("all").with_shorthand("a"),
            ArgumentSpec::flag("long").with_shorthand("l"),
        ]
    }

    #[test]
    fn empty_tokens_with_no_specs() {
        let bound = extract::<&str>(&[], &[]).unwrap();
        assert!(bound.is_empty());
    }

    #[test]
    fn omitted_flag_is_absent() {
        let bound = extract::<&str>(&[], &ls_specs()).unwrap();
        assert!(!bound.is_present("all"));
        assert!(!bound.is_present("long"));
    }

    #[test]
    fn included_flag_binds_once_with_empty_value() {
        let bound = extract(&["--all"], &ls_specs()).unwrap();
        let flags: Vec<_> = bound.iter().filter(|a| a.is_flag).collect();
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].name, "all");
        assert!(flags[0].value.is_empty());
    }

    #[test]
    fn flag_does_not_consume_following_token() {
        let bound = extract(&["-l", "src"], &ls_specs()).unwrap();
        assert_eq!(
            pairs(&bound),
            vec![
                ("long".to_string(), String::new()),
                ("[directory]".to_string(), "src".to_string()),
            ]
        );
    }

    #[test]
    fn positional_default_used_when_no_token() {
        let bound = extract::<&str>(&[], &ls_specs()).unwrap();
        assert_eq!(bound.value("[directory]"), Some("."));
    }

    #[test]
    fn explicit_positional_overrides_default() {
        let bound = extract(&["/tmp"], &ls_specs()).unwrap();
        assert_eq!(bound.value("[directory]"), Some("/tmp"));
        assert_eq!(bound.len(), 1);
    }

    #[test]
    fn named_values_bind_in_consumption_order() {
        let specs = vec![
            ArgumentSpec::value("a").with_shorthand("x"),
            ArgumentSpec::value("b").with_shorthand("y"),
        ];
        let bound = extract(&["--a", "1", "-y", "2"], &specs).unwrap();
        assert_eq!(
            pairs(&bound),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn value_token_is_taken_verbatim() {
        let specs = vec![ArgumentSpec::value("pattern").with_shorthand("p")];
        let bound = extract(&["-p", "--all"], &specs).unwrap();
        assert_eq!(bound.value("pattern"), Some("--all"));
    }

    #[test]
    fn missing_value_at_end_of_tokens() {
        let specs = vec![ArgumentSpec::value("cmd").with_shorthand("c")];
        let err = extract(&["-c"], &specs).unwrap_err();
        assert!(matches!(err, AresError::MissingValue { ref name } if name == "cmd"));
    }

    #[test]
    fn missing_value_when_next_token_is_empty() {
        let specs = vec![ArgumentSpec::value("cmd")];
        let err = extract(&["--cmd", ""], &specs).unwrap_err();
        assert!(matches!(err, AresError::MissingValue { .. }));
    }

    #[test]
    fn undeclared_name_is_invalid() {
        let err = extract(&["--zzz"], &ls_specs()).unwrap_err();
        assert!(matches!(err, AresError::InvalidArgument { ref token } if token == "--zzz"));
    }

    #[test]
    fn positional_name_is_not_addressable_with_dashes() {
        let err = extract(&["--[directory]", "x"], &ls_specs()).unwrap_err();
        assert!(matches!(err, AresError::InvalidArgument { .. }));
    }

    #[test]
    fn surplus_positional_is_invalid() {
        let err = extract(&["one", "two"], &ls_specs()).unwrap_err();
        assert!(matches!(err, AresError::InvalidArgument { ref token } if token == "two"));
    }

    #[test]
    fn missing_positional_without_default() {
        let specs = vec![ArgumentSpec::positional("[directory]")];
        let err = extract::<&str>(&[], &specs).unwrap_err();
        assert!(
            matches!(err, AresError::MissingPositional { ref name } if name == "[directory]")
        );
    }

    #[test]
    fn partially_filled_positionals_take_trailing_defaults() {
        let specs = vec![
            ArgumentSpec::positional("[source]"),
            ArgumentSpec::positional("[dest]").with_default("out"),
            ArgumentSpec::positional("[mode]").with_default("copy"),
        ];
        let bound = extract(&["in"], &specs).unwrap();
        assert_eq!(
            pairs(&bound),
            vec![
                ("[source]".to_string(), "in".to_string()),
                ("[dest]".to_string(), "out".to_string()),
                ("[mode]".to_string(), "copy".to_string()),
            ]
        );
    }

    #[test]
    fn defaults_append_after_consumed_tokens() {
        let specs = vec![
            ArgumentSpec::positional("[directory]").with_default("."),
            ArgumentSpec::flag("all").with_shorthand("a"),
        ];
        let bound = extract(&["-a"], &specs).unwrap();
        let names: Vec<_> = bound.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["all", "[directory]"]);
    }

    #[test]
    fn name_lookup_precedes_shorthand() {
        let specs = vec![
            ArgumentSpec::flag("verbose").with_shorthand("v"),
            ArgumentSpec::flag("v"),
        ];
        let bound = extract(&["-v"], &specs).unwrap();
        assert_eq!(bound.iter().next().unwrap().name, "v");
    }

    #[test]
    fn any_number_of_leading_dashes_is_accepted() {
        let bound = extract(&["---all"], &ls_specs()).unwrap();
        assert!(bound.is_present("all"));
    }

    #[test]
    fn bare_dash_is_invalid() {
        let err = extract(&["-"], &ls_specs()).unwrap_err();
        assert!(matches!(err, AresError::InvalidArgument { ref token } if token == "-"));
    }
}
