//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shell configuration, read from `~/.ares/config.yml` or `--config`.
///
/// ```yaml
/// prompt: ares
/// show_cwd: true
/// start_dir: /srv/projects
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Text shown at the start of the prompt.
    pub prompt: String,

    /// Include the working directory in the prompt.
    pub show_cwd: bool,

    /// Directory the session starts in (defaults to the home directory).
    pub start_dir: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "ares".to_string(),
            show_cwd: true,
            start_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, "ares");
        assert!(config.show_cwd);
        assert!(config.start_dir.is_none());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: ShellConfig = serde_yaml::from_str("prompt: sh").unwrap();
        assert_eq!(config.prompt, "sh");
        assert!(config.show_cwd);
    }

    #[test]
    fn parses_all_fields() {
        let yaml = "prompt: dev\nshow_cwd: false\nstart_dir: /srv\n";
        let config: ShellConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.prompt, "dev");
        assert!(!config.show_cwd);
        assert_eq!(config.start_dir, Some(PathBuf::from("/srv")));
    }
}
