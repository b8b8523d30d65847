// mycode - project locator and launcher
//
// This is the library crate containing the rule parser, project resolution and
// recency ranking. The binary crate (main.rs) provides the command line.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigManager, SettingsSource};
pub use models::{Configuration, ExclusionRule, ProjectMap, RuleSet, Settings};
pub use services::{
    ConfigParser, GroupRegistry, PathExpander, ProjectCatalog, ProjectResolver, RecencyRanker,
    RegistryError, ScanOptions,
};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
