//! Services module - project resolution logic.
//!
//! Everything here is independent of the command line and works on explicit
//! inputs, which keeps each stage testable on its own.
//!
//! # Components
//!
//! - [`ConfigParser`]: reads the `mycoderc` grammar into a [`Configuration`](crate::models::Configuration),
//!   reporting ignored lines as [`Diagnostic`]s
//! - [`ProjectResolver`]: expands bulk-add directories, applies exclusions and
//!   overlays specific projects
//! - [`RecencyRanker`]: orders projects by the newest modification time in their subtree
//! - [`GroupRegistry`] and [`ProjectCatalog`]: group enumeration and the
//!   `resolve_global` / `resolve_group` / `list_group_names` entry points
//! - [`ProjectLauncher`]: seam for handing a resolved project to an editor
//! - [`report`]: text layout for `--show` and `--check`
//!
//! # Flow
//!
//! 1. Parse the rule document once
//! 2. Resolve the global scope or one group into a [`ProjectMap`](crate::models::ProjectMap)
//! 3. Rank the map most-recent-first before it is shown or launched

pub mod launcher;
pub mod parser;
pub mod ranker;
pub mod registry;
pub mod report;
pub mod resolver;

pub use launcher::{EditorLauncher, LaunchError, OpenOutcome, ProjectLauncher, open_project};
pub use parser::{ConfigParser, Diagnostic, DiagnosticKind, ParsedDocument, PathExpander};
pub use ranker::{RankedProject, RecencyRanker, latest_modified};
pub use registry::{GroupRegistry, ProjectCatalog, RegistryError};
pub use report::ShowScope;
pub use resolver::{ProjectResolver, ScanOptions};
