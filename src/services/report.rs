//! Text output for the command line.
//!
//! Everything writes to an `impl Write` so the layout can be checked without a terminal.

use std::io::{self, Write};

use camino::Utf8Path;

use crate::models::ProjectMap;
use crate::services::parser::Diagnostic;
use crate::services::registry::{ProjectCatalog, RegistryError};

/// Scope named by `--show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowScope {
    Global,
    AllGroups,
    Group(String),
}

impl ShowScope {
    pub const GLOBAL: &'static str = "global";
    pub const GROUPS: &'static str = "groups";

    pub fn from_arg(arg: &str) -> Self {
        match arg {
            Self::GLOBAL => Self::Global,
            Self::GROUPS => Self::AllGroups,
            name => Self::Group(name.to_string()),
        }
    }
}

/// One project name per line, in map order.
pub fn write_projects<W: Write>(out: &mut W, projects: &ProjectMap) -> io::Result<()> {
    for name in projects.keys() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// `Group: NAME` followed by `  - project` lines for every group.
pub fn write_groups<W: Write>(out: &mut W, catalog: &ProjectCatalog) -> io::Result<()> {
    for (group, projects) in catalog.groups().resolve_all() {
        writeln!(out, "Group: {}", group)?;
        for name in projects.keys() {
            writeln!(out, "  - {}", name)?;
        }
    }
    Ok(())
}

/// Print the projects for `scope`.
///
/// # Returns
/// `false` when a named group does not exist; the not-found message has been written.
pub fn write_show<W: Write>(out: &mut W, catalog: &ProjectCatalog, scope: &ShowScope) -> io::Result<bool> {
    match scope {
        ShowScope::Global => write_projects(out, &catalog.resolve_global())?,
        ShowScope::AllGroups => write_groups(out, catalog)?,
        ShowScope::Group(name) => match catalog.resolve_group(name) {
            Ok(projects) => write_projects(out, &projects)?,
            Err(RegistryError::GroupNotFound(name)) => {
                writeln!(out, "Group '{}' not found.", name)?;
                return Ok(false);
            }
        },
    }
    Ok(true)
}

pub fn write_project_not_found<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    writeln!(out, "Project '{}' not found.", name)
}

/// `FILE:LINE: reason: text` for each ignored line of the rule document.
pub fn write_diagnostics<W: Write>(
    out: &mut W,
    rules_path: &Utf8Path,
    diagnostics: &[Diagnostic],
) -> io::Result<()> {
    if diagnostics.is_empty() {
        return writeln!(out, "{}: no ignored lines", rules_path);
    }

    for diagnostic in diagnostics {
        writeln!(
            out,
            "{}:{}: {}: {}",
            rules_path, diagnostic.line, diagnostic.kind, diagnostic.text
        )?;
    }
    Ok(())
}
