//! Data models for mycode.
//!
//! - [`RuleSet`]: bulk-add directories, specific projects and exclusions for one scope
//! - [`Configuration`]: the global [`RuleSet`] plus named groups in declaration order
//! - [`ProjectMap`]: resolved project name to directory, ordered
//! - [`Settings`]: launcher preferences loaded from `settings.yaml`
//!
//! Rule models are built once by the parser and read-only afterwards.

pub mod rules;
pub mod settings;

pub use rules::{Configuration, ExclusionRule, ProjectMap, RuleSet};
pub use settings::Settings;
