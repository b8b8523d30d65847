use std::process::{Command, ExitStatus};

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::models::ProjectMap;

/// Errors that can occur while handing a project to the editor
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Editor command not configured")]
    EditorNotConfigured,

    #[error("Failed to start editor '{editor}': {source}")]
    Spawn {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor '{editor}' exited with {status}")]
    EditorFailed { editor: String, status: ExitStatus },
}

/// Outcome of [`open_project`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened(Utf8PathBuf),
    NotFound,
}

/// Something that can open a project directory.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectLauncher {
    fn launch(&self, name: &str, path: &Utf8Path) -> Result<(), LaunchError>;
}

/// Runs an editor command with the project path as its last argument.
///
/// The command is split on whitespace, so `"code -n"` runs `code -n <path>`.
#[derive(Debug, Clone)]
pub struct EditorLauncher {
    editor: String,
}

impl EditorLauncher {
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
        }
    }

    /// Program and leading arguments for `path`.
    pub fn command_line(&self, path: &Utf8Path) -> Result<Vec<String>, LaunchError> {
        let mut parts: Vec<String> = self.editor.split_whitespace().map(str::to_string).collect();
        if parts.is_empty() {
            return Err(LaunchError::EditorNotConfigured);
        }
        parts.push(path.to_string());
        Ok(parts)
    }
}

impl ProjectLauncher for EditorLauncher {
    fn launch(&self, name: &str, path: &Utf8Path) -> Result<(), LaunchError> {
        let command_line = self.command_line(path)?;
        tracing::info!("Opening project '{}' with: {}", name, command_line.join(" "));

        let status = Command::new(&command_line[0])
            .args(&command_line[1..])
            .status()
            .map_err(|source| LaunchError::Spawn {
                editor: self.editor.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::EditorFailed {
                editor: self.editor.clone(),
                status,
            })
        }
    }
}

/// Look `name` up in `projects` and launch it.
pub fn open_project(
    projects: &ProjectMap,
    name: &str,
    launcher: &dyn ProjectLauncher,
) -> Result<OpenOutcome, LaunchError> {
    match projects.get(name) {
        Some(path) => {
            launcher.launch(name, path)?;
            Ok(OpenOutcome::Opened(path.clone()))
        }
        None => {
            tracing::debug!("Project '{}' not in {} resolved projects", name, projects.len());
            Ok(OpenOutcome::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_projects() -> ProjectMap {
        let mut projects = ProjectMap::new();
        projects.insert("api".to_string(), Utf8PathBuf::from("/work/api"));
        projects
    }

    #[test]
    fn test_open_known_project_launches() {
        let mut launcher = MockProjectLauncher::new();
        launcher
            .expect_launch()
            .withf(|name, path| name == "api" && path == Utf8Path::new("/work/api"))
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = open_project(&sample_projects(), "api", &launcher).unwrap();
        assert_eq!(outcome, OpenOutcome::Opened(Utf8PathBuf::from("/work/api")));
    }

    #[test]
    fn test_open_unknown_project_does_not_launch() {
        let mut launcher = MockProjectLauncher::new();
        launcher.expect_launch().times(0);

        let outcome = open_project(&sample_projects(), "web", &launcher).unwrap();
        assert_eq!(outcome, OpenOutcome::NotFound);
    }

    #[test]
    fn test_launch_failure_propagates() {
        let mut launcher = MockProjectLauncher::new();
        launcher
            .expect_launch()
            .withf(|name, _| name == "api")
            .returning(|_, _| Err(LaunchError::EditorNotConfigured));

        let result = open_project(&sample_projects(), "api", &launcher);
        assert!(matches!(result, Err(LaunchError::EditorNotConfigured)));
    }

    #[test]
    fn test_command_line_splits_editor() {
        let launcher = EditorLauncher::new("code -n");
        let command_line = launcher.command_line(Utf8Path::new("/work/api")).unwrap();
        assert_eq!(command_line, vec!["code", "-n", "/work/api"]);
    }

    #[test]
    fn test_blank_editor_is_error() {
        let launcher = EditorLauncher::new("   ");
        assert!(matches!(
            launcher.command_line(Utf8Path::new("/x")),
            Err(LaunchError::EditorNotConfigured)
        ));
    }
}
