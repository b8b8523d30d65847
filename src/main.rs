//! mycode - open code projects by name.
//!
//! Reads `~/.config/mycode/mycoderc`, resolves it into projects ordered by
//! recent activity, and either lists them or opens one in the configured editor.
//!
//! # Usage
//!
//! ```text
//! mycode PROJECT            open PROJECT from the global scope
//! mycode --show             list global projects, most recent first
//! mycode --show groups      list every group with its projects
//! mycode --show NAME        list the projects of group NAME
//! mycode --check            report lines of mycoderc that were ignored
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser};
use mycode::config::{ConfigManager, SettingsSource};
use mycode::services::report::{self, ShowScope};
use mycode::services::{EditorLauncher, OpenOutcome, PathExpander, ProjectCatalog, ScanOptions, open_project};
use mycode::{APP_NAME, VERSION};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Open code projects by name, ranked by recent activity",
    long_about = None
)]
struct Args {
    /// Name of project to open
    project: Option<String>,

    /// Show projects: `global` (default), `groups`, or a group name
    #[arg(
        long,
        short,
        value_name = "SCOPE",
        num_args = 0..=1,
        default_missing_value = ShowScope::GLOBAL
    )]
    show: Option<String>,

    /// Report ignored lines in the rule document
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(long, short)]
    debug: bool,

    /// Use a different configuration directory
    #[arg(long, value_name = "DIR")]
    config_dir: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    let manager = match &args.config_dir {
        Some(dir) => ConfigManager::new(Utf8PathBuf::from(dir)),
        None => ConfigManager::with_default_dir()?,
    };
    let (settings, settings_source) = manager.load_settings()?;

    let _guard = mycode::logging::setup_logging(
        args.debug || settings.debug_mode,
        settings.log_dir.as_deref(),
        APP_NAME,
    )?;
    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);
    if settings_source == SettingsSource::Defaults {
        tracing::info!(
            "No settings at {}, using defaults",
            manager.settings_path()
        );
    }

    let expander = PathExpander::from_env()?;
    let document = manager
        .load_configuration(expander)
        .context("Cannot resolve projects without a rule document")?;

    if args.check {
        let mut stderr = io::stderr().lock();
        report::write_diagnostics(&mut stderr, manager.rules_path(), &document.diagnostics)?;
    }

    let catalog = ProjectCatalog::new(
        document.configuration,
        ScanOptions {
            include_hidden: settings.include_hidden,
        },
    );

    let mut stdout = io::stdout().lock();

    if let Some(scope) = &args.show {
        let found = report::write_show(&mut stdout, &catalog, &ShowScope::from_arg(scope))?;
        stdout.flush()?;
        return Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    if let Some(project) = &args.project {
        let projects = catalog.resolve_global();
        let launcher = EditorLauncher::new(settings.editor);
        return match open_project(&projects, project, &launcher)? {
            OpenOutcome::Opened(path) => {
                writeln!(stdout, "Opened project '{}' ({})", project, path)?;
                Ok(ExitCode::SUCCESS)
            }
            OpenOutcome::NotFound => {
                report::write_project_not_found(&mut stdout, project)?;
                Ok(ExitCode::FAILURE)
            }
        };
    }

    if !args.check {
        Args::command().print_help()?;
    }
    Ok(ExitCode::SUCCESS)
}
