use crate::models::Settings;
use crate::services::{ConfigParser, ParsedDocument, PathExpander};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the rule document inside the configuration directory
pub const RULES_FILE_NAME: &str = "mycoderc";

/// File name of the optional launcher settings
pub const SETTINGS_FILE_NAME: &str = "settings.yaml";

/// Where [`ConfigManager::load_settings`] got its values from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    File,
    /// No settings file, or an empty one
    Defaults,
}

/// Errors raised while locating or reading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    Missing { path: Utf8PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine the home directory")]
    HomeUnavailable,

    #[error("Could not determine the current working directory: {0}")]
    WorkingDirUnavailable(#[source] io::Error),

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Failed to parse settings {path}: {source}")]
    Settings {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Configuration manager for the rule document and launcher settings.
///
/// Manages two files in one directory:
/// - Rule document (`mycoderc`): required, parsed with [`ConfigParser`]
/// - Settings (`settings.yaml`): optional, defaults when absent
///
/// Never creates or writes either file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    rules_path: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager for the specified configuration directory.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref().to_path_buf();

        Self {
            rules_path: config_dir.join(RULES_FILE_NAME),
            settings_path: config_dir.join(SETTINGS_FILE_NAME),
            config_dir,
        }
    }

    /// ConfigManager for `~/.config/mycode`.
    pub fn with_default_dir() -> Result<Self, ConfigError> {
        Ok(Self::new(Self::default_config_dir()?))
    }

    pub fn default_config_dir() -> Result<Utf8PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeUnavailable)?;
        let home = Utf8PathBuf::from_path_buf(home).map_err(ConfigError::NonUtf8Path)?;
        Ok(home.join(".config").join("mycode"))
    }

    /// Read and parse the rule document.
    ///
    /// # Errors
    /// [`ConfigError::Missing`] when the file does not exist; no default is substituted.
    pub fn load_configuration(&self, expander: PathExpander) -> Result<ParsedDocument, ConfigError> {
        let text = fs::read_to_string(&self.rules_path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::Missing {
                    path: self.rules_path.clone(),
                }
            } else {
                ConfigError::Read {
                    path: self.rules_path.clone(),
                    source,
                }
            }
        })?;

        let document = ConfigParser::new(expander).parse(&text);

        tracing::info!(
            "Loaded rule document from {} ({} groups, {} ignored lines)",
            self.rules_path,
            document.configuration.groups.len(),
            document.diagnostics.len()
        );
        Ok(document)
    }

    /// Load the settings file.
    ///
    /// Settings decide how logging is set up, so this runs before a subscriber
    /// exists; the caller logs the returned [`SettingsSource`] afterwards.
    ///
    /// # Returns
    /// The loaded Settings, or defaults if the file doesn't exist
    pub fn load_settings(&self) -> Result<(Settings, SettingsSource), ConfigError> {
        if !self.settings_path.exists() {
            return Ok((Settings::default(), SettingsSource::Defaults));
        }

        let file_contents =
            fs::read_to_string(&self.settings_path).map_err(|source| ConfigError::Read {
                path: self.settings_path.clone(),
                source,
            })?;

        // An empty file deserializes to nothing; treat it like a missing one.
        if file_contents.trim().is_empty() {
            return Ok((Settings::default(), SettingsSource::Defaults));
        }

        let settings: Settings =
            serde_yaml_ng::from_str(&file_contents).map_err(|source| ConfigError::Settings {
                path: self.settings_path.clone(),
                source,
            })?;

        Ok((settings, SettingsSource::File))
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    pub fn rules_path(&self) -> &Utf8Path {
        &self.rules_path
    }

    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}
