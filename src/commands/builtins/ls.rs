//! `ls` - list directory contents.

use std::fs;
use std::path::Path;

use crate::args::{ArgumentSpec, BoundArgs};
use crate::commands::command::{CommandHandler, CommandOutput, CommandSpec};
use crate::error::{AresError, Result};
use crate::session::SessionState;

use super::DIRECTORY;

const ALL: &str = "all";
const LONG: &str = "long";

/// Lists the entries of a directory, the working directory by default.
pub struct ListDirectory;

impl ListDirectory {
    /// The `ls` command definition.
    pub fn spec() -> CommandSpec {
        CommandSpec::new(
            "ls",
            "List information about the FILEs (the current directory by default).",
            "ls [directory] [flags]",
            ListDirectory,
        )
        .with_arg(
            ArgumentSpec::positional(DIRECTORY)
                .with_default(".")
                .with_help("Directory to list"),
        )
        .with_arg(
            ArgumentSpec::flag(ALL)
                .with_shorthand("a")
                .with_help("Include entries starting with ."),
        )
        .with_arg(
            ArgumentSpec::flag(LONG)
                .with_shorthand("l")
                .with_help("Show entry kind and size"),
        )
    }
}

/// One directory entry as `ls` reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    kind: char,
    size: u64,
}

fn read_entries(dir: &Path, include_hidden: bool) -> std::io::Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !include_hidden && name.starts_with('.') {
            continue;
        }

        let file_type = entry.file_type()?;
        let kind = if file_type.is_dir() {
            'd'
        } else if file_type.is_symlink() {
            'l'
        } else {
            '-'
        };
        let size = entry.metadata()?.len();

        entries.push(Entry { name, kind, size });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn render(entries: &[Entry], long: bool) -> String {
    let mut lines = vec![format!("total: {}", entries.len())];
    for entry in entries {
        if long {
            lines.push(format!("{} {:>10} {}", entry.kind, entry.size, entry.name));
        } else {
            lines.push(entry.name.clone());
        }
    }
    lines.join("\n")
}

impl CommandHandler for ListDirectory {
    fn execute(&self, args: &BoundArgs, state: &SessionState) -> Result<CommandOutput> {
        let target = args.value(DIRECTORY).unwrap_or(".");
        let dir = state.resolve(target);

        if !dir.is_dir() {
            return Err(AresError::handler(
                "ls",
                format!("directory does not exist: {}", dir.display()),
            ));
        }

        let entries = read_entries(&dir, args.is_present(ALL)).map_err(|e| {
            AresError::handler("ls", format!("cannot read {}: {}", dir.display(), e))
        })?;

        Ok(CommandOutput::unchanged(
            render(&entries, args.is_present(LONG)),
            state,
        ))
    }
}
