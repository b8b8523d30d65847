use camino::{Utf8Path, Utf8PathBuf};

use crate::models::{ProjectMap, RuleSet};

/// Options for bulk-add expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Treat dot-directories as projects
    pub include_hidden: bool,
}

/// Turns a [`RuleSet`] into a [`ProjectMap`].
///
/// Bulk-add directories are expanded into their immediate subdirectories in
/// lexical order, exclusions are applied per parent directory, and specific
/// projects are laid over the result. Later bulk-add directories win name
/// collisions; specific projects always win.
#[derive(Debug, Clone, Default)]
pub struct ProjectResolver {
    options: ScanOptions,
}

impl ProjectResolver {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn resolve(&self, rules: &RuleSet) -> ProjectMap {
        let mut projects = ProjectMap::new();

        for bulk_dir in &rules.bulk_add_dirs {
            for (name, path) in self.candidates(bulk_dir) {
                if rules.is_excluded(&path, bulk_dir) {
                    tracing::debug!("Excluding {} from {}", path, bulk_dir);
                    continue;
                }
                projects.insert(name, path);
            }
        }

        // Specific entries are not re-checked for existence.
        for (name, path) in &rules.specific_projects {
            projects.insert(name.clone(), path.clone());
        }

        tracing::debug!(
            "Resolved {} projects from {} bulk-add directories and {} specific entries",
            projects.len(),
            rules.bulk_add_dirs.len(),
            rules.specific_projects.len()
        );
        projects
    }

    /// Immediate child directories of `bulk_dir`, sorted by name.
    fn candidates(&self, bulk_dir: &Utf8Path) -> Vec<(String, Utf8PathBuf)> {
        let entries = match bulk_dir.read_dir_utf8() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Skipping bulk-add directory {}: {}", bulk_dir, e);
                return Vec::new();
            }
        };

        let mut candidates: Vec<(String, Utf8PathBuf)> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry in {}: {}", bulk_dir, e);
                    None
                }
            })
            .filter(|entry| self.options.include_hidden || !entry.file_name().starts_with('.'))
            .filter(|entry| entry.path().is_dir())
            .map(|entry| (entry.file_name().to_string(), entry.path().to_path_buf()))
            .collect();

        candidates.sort_by(|a, b| a.0.cmp(&b.0));
        candidates
    }
}
