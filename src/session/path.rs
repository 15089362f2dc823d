//! Lexical path resolution for the working directory.

use std::path::{Component, Path, PathBuf};

/// Join `target` onto `base` and normalize the result lexically.
///
/// An absolute `target` replaces `base`. `.` components are dropped and
/// `..` removes the previous component; `..` at the root stays at the root.
/// Symlinks are not consulted.
pub fn resolve_path(base: &Path, target: &str) -> PathBuf {
    let joined = base.join(target);
    let mut resolved = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => resolved.push(".."),
            },
            Component::Normal(part) => resolved.push(part),
        }
    }

    if resolved.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        resolved
    }
}
