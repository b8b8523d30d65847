//! Parser for the `mycoderc` rule document.
//!
//! The grammar is line oriented. Each line is trimmed and blank lines are skipped:
//!
//! ```text
//! --add ~/code                      # every subdirectory of ~/code is a project
//! --addspecific ~/notes             # ~/notes itself is the project "notes"
//! --remove ~/code/old --from ~/code # drop ~/code/old from the ~/code expansion
//!
//! [group:work]
//! --add ~/work
//! }
//! ```
//!
//! Anything the parser does not understand is ignored. Every ignored line is
//! reported as a [`Diagnostic`] so callers can surface typos without changing
//! what gets resolved.

use std::fmt;

use camino::Utf8PathBuf;
use regex::Regex;

use crate::config::ConfigError;
use crate::models::{Configuration, ExclusionRule, RuleSet};

const ADD_PREFIX: &str = "--add ";
const ADD_SPECIFIC_PREFIX: &str = "--addspecific ";
const REMOVE_KEYWORD: &str = "--remove";
const FROM_KEYWORD: &str = "--from";
const GROUP_PREFIX: &str = "[group:";
const GROUP_CLOSE: &str = "}";

/// Why a line contributed nothing to the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// No recognised directive prefix
    UnknownDirective,
    /// `--remove ... --from ...` that does not split into two non-empty paths
    MalformedRemove,
    /// `--add`/`--addspecific` target missing or not a directory
    PathUnavailable,
    /// `--addspecific` target has no final component to name the project by
    MissingProjectName,
    /// `}` outside of a group
    StrayGroupClose,
    /// Starts like a group header but is not `[group:NAME]`
    MalformedGroupHeader,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnknownDirective => "unknown directive",
            Self::MalformedRemove => "expected `--remove PATH --from PARENT`",
            Self::PathUnavailable => "path is not an existing directory",
            Self::MissingProjectName => "path has no project name",
            Self::StrayGroupClose => "`}` outside of a group",
            Self::MalformedGroupHeader => "expected `[group:NAME]`",
        };
        f.write_str(text)
    }
}

/// One ignored line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    /// Trimmed line text
    pub text: String,
    pub kind: DiagnosticKind,
}

/// Result of parsing a rule document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub configuration: Configuration,
    pub diagnostics: Vec<Diagnostic>,
}

/// Turns rule paths into absolute paths.
///
/// `~` and `~/...` expand against `home`; anything still relative is joined onto `cwd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpander {
    home: Utf8PathBuf,
    cwd: Utf8PathBuf,
}

impl PathExpander {
    pub fn new(home: impl Into<Utf8PathBuf>, cwd: impl Into<Utf8PathBuf>) -> Self {
        Self {
            home: home.into(),
            cwd: cwd.into(),
        }
    }

    /// Build an expander for the invoking user and the current working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeUnavailable)?;
        let home = Utf8PathBuf::from_path_buf(home).map_err(ConfigError::NonUtf8Path)?;

        let cwd = std::env::current_dir().map_err(ConfigError::WorkingDirUnavailable)?;
        let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(ConfigError::NonUtf8Path)?;

        Ok(Self::new(home, cwd))
    }

    pub fn expand(&self, raw: &str) -> Utf8PathBuf {
        let expanded = if raw == "~" {
            self.home.clone()
        } else if let Some(rest) = raw.strip_prefix("~/") {
            self.home.join(rest)
        } else {
            Utf8PathBuf::from(raw)
        };

        if expanded.is_absolute() {
            expanded
        } else {
            self.cwd.join(expanded)
        }
    }
}

/// Parser for the rule document.
///
/// Holds the compiled group-header pattern and the [`PathExpander`] used for
/// every rule path. Parsing never fails: unrecognised lines become diagnostics.
pub struct ConfigParser {
    group_header: Regex,
    expander: PathExpander,
}

impl ConfigParser {
    pub fn new(expander: PathExpander) -> Self {
        Self {
            group_header: Regex::new(r"^\[group:([^\]]+)\]$").expect("Invalid group header regex"),
            expander,
        }
    }

    /// Parse the full text of a rule document.
    ///
    /// A `[group:NAME]` line opens a group that lasts until `}`. Opening a new
    /// group while one is open simply switches to the new group, and an unclosed
    /// group runs to the end of the document. Declaring a name twice resets that
    /// group but keeps its original position.
    pub fn parse(&self, text: &str) -> ParsedDocument {
        let mut document = ParsedDocument::default();
        let mut current_group: Option<String> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            let line_number = index + 1;

            if line.starts_with(GROUP_PREFIX) {
                match self.group_header.captures(line) {
                    Some(captures) => {
                        let name = captures[1].to_string();
                        tracing::debug!("Line {}: opening group '{}'", line_number, name);
                        document
                            .configuration
                            .groups
                            .insert(name.clone(), RuleSet::default());
                        current_group = Some(name);
                    }
                    None => document.ignore(
                        line_number,
                        line,
                        DiagnosticKind::MalformedGroupHeader,
                    ),
                }
                continue;
            }

            if line == GROUP_CLOSE {
                if current_group.take().is_none() {
                    document.ignore(line_number, line, DiagnosticKind::StrayGroupClose);
                }
                continue;
            }

            let ParsedDocument {
                configuration,
                diagnostics,
            } = &mut document;
            let target = match &current_group {
                Some(name) => configuration.groups.entry(name.clone()).or_default(),
                None => &mut configuration.global,
            };

            if let Err(kind) = self.apply_rule(line, target) {
                diagnostics.push(Diagnostic {
                    line: line_number,
                    text: line.to_string(),
                    kind,
                });
                tracing::debug!("Ignoring line {}: {} ({})", line_number, line, kind);
            }
        }

        tracing::debug!(
            "Parsed rule document: {} groups, {} ignored lines",
            document.configuration.groups.len(),
            document.diagnostics.len()
        );
        document
    }

    /// Apply one rule line to `target`.
    fn apply_rule(&self, line: &str, target: &mut RuleSet) -> Result<(), DiagnosticKind> {
        if let Some(raw) = line.strip_prefix(ADD_PREFIX) {
            let path = self.existing_dir(raw)?;
            target.bulk_add_dirs.push(path);
            return Ok(());
        }

        if let Some(raw) = line.strip_prefix(ADD_SPECIFIC_PREFIX) {
            let path = self.existing_dir(raw)?;
            let name = path
                .file_name()
                .ok_or(DiagnosticKind::MissingProjectName)?
                .to_string();
            target.specific_projects.insert(name, path);
            return Ok(());
        }

        if line.starts_with(REMOVE_KEYWORD) && line.contains(FROM_KEYWORD) {
            let rule = self.parse_remove(&line[REMOVE_KEYWORD.len()..])?;
            target.remove_rules.push(rule);
            return Ok(());
        }

        Err(DiagnosticKind::UnknownDirective)
    }

    fn parse_remove(&self, rest: &str) -> Result<ExclusionRule, DiagnosticKind> {
        let fragments: Vec<&str> = rest.split(FROM_KEYWORD).map(str::trim).collect();
        match fragments.as_slice() {
            [excluded, parent] if !excluded.is_empty() && !parent.is_empty() => Ok(
                ExclusionRule::new(self.expander.expand(excluded), self.expander.expand(parent)),
            ),
            _ => Err(DiagnosticKind::MalformedRemove),
        }
    }

    fn existing_dir(&self, raw: &str) -> Result<Utf8PathBuf, DiagnosticKind> {
        let path = self.expander.expand(raw.trim());
        if path.is_dir() {
            Ok(path)
        } else {
            Err(DiagnosticKind::PathUnavailable)
        }
    }
}

impl ParsedDocument {
    fn ignore(&mut self, line: usize, text: &str, kind: DiagnosticKind) {
        tracing::debug!("Ignoring line {}: {} ({})", line, text, kind);
        self.diagnostics.push(Diagnostic {
            line,
            text: text.to_string(),
            kind,
        });
    }
}
