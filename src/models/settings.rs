use camino::Utf8PathBuf;
use serde::Deserialize;

/// Launcher settings from `settings.yaml`.
///
/// Every field is optional in the file; missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Editor command used to open a project
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Treat dot-directories inside bulk-add directories as projects
    #[serde(default)]
    pub include_hidden: bool,

    #[serde(default)]
    pub debug_mode: bool,

    /// Directory for rotating log files; console only when unset
    #[serde(default)]
    pub log_dir: Option<Utf8PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor: default_editor(),
            include_hidden: false,
            debug_mode: false,
            log_dir: None,
        }
    }
}

fn default_editor() -> String {
    "code".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.editor, "code");
        assert!(!settings.include_hidden);
        assert!(!settings.debug_mode);
        assert!(settings.log_dir.is_none());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml_ng::from_str("include_hidden: true\n").unwrap();
        assert!(settings.include_hidden);
        assert_eq!(settings.editor, "code");
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "editor: nvim\ndebug_mode: true\nlog_dir: /tmp/mycode-logs\n";
        let settings: Settings = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(settings.editor, "nvim");
        assert!(settings.debug_mode);
        assert_eq!(
            settings.log_dir,
            Some(Utf8PathBuf::from("/tmp/mycode-logs"))
        );
    }
}
