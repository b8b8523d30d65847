use indexmap::IndexMap;
use thiserror::Error;

use crate::models::{Configuration, ProjectMap, RuleSet};
use crate::services::ranker::RecencyRanker;
use crate::services::resolver::{ProjectResolver, ScanOptions};

/// Errors from group lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Group '{0}' not found")]
    GroupNotFound(String),
}

/// Read-only view over the declared groups.
///
/// Resolving a group runs its [`RuleSet`] through the resolver and then the ranker.
pub struct GroupRegistry<'a> {
    groups: &'a IndexMap<String, RuleSet>,
    resolver: &'a ProjectResolver,
    ranker: &'a RecencyRanker,
}

impl<'a> GroupRegistry<'a> {
    pub fn new(
        groups: &'a IndexMap<String, RuleSet>,
        resolver: &'a ProjectResolver,
        ranker: &'a RecencyRanker,
    ) -> Self {
        Self {
            groups,
            resolver,
            ranker,
        }
    }

    /// Group names in declaration order
    pub fn names(&self) -> Vec<&'a str> {
        self.groups.keys().map(String::as_str).collect()
    }

    pub fn rules(&self, name: &str) -> Result<&'a RuleSet, RegistryError> {
        self.groups
            .get(name)
            .ok_or_else(|| RegistryError::GroupNotFound(name.to_string()))
    }

    pub fn resolve(&self, name: &str) -> Result<ProjectMap, RegistryError> {
        let rules = self.rules(name)?;
        Ok(self.ranker.rank(self.resolver.resolve(rules)))
    }

    /// Every group with its ranked projects, in declaration order.
    pub fn resolve_all(&self) -> Vec<(&'a str, ProjectMap)> {
        self.groups
            .iter()
            .map(|(name, rules)| {
                (
                    name.as_str(),
                    self.ranker.rank(self.resolver.resolve(rules)),
                )
            })
            .collect()
    }
}

/// Entry point for launchers: owns the parsed [`Configuration`] and answers
/// global and per-group project queries.
pub struct ProjectCatalog {
    configuration: Configuration,
    resolver: ProjectResolver,
    ranker: RecencyRanker,
}

impl ProjectCatalog {
    pub fn new(configuration: Configuration, options: ScanOptions) -> Self {
        Self {
            configuration,
            resolver: ProjectResolver::new(options),
            ranker: RecencyRanker::new(),
        }
    }

    pub fn groups(&self) -> GroupRegistry<'_> {
        GroupRegistry::new(&self.configuration.groups, &self.resolver, &self.ranker)
    }

    /// Global projects, most recently modified first
    pub fn resolve_global(&self) -> ProjectMap {
        self.ranker
            .rank(self.resolver.resolve(&self.configuration.global))
    }

    pub fn resolve_group(&self, name: &str) -> Result<ProjectMap, RegistryError> {
        self.groups().resolve(name)
    }

    pub fn list_group_names(&self) -> Vec<String> {
        self.groups().names().into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn create_catalog() -> (TempDir, Utf8PathBuf, ProjectCatalog) {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        fs::create_dir_all(root.join("work/api")).unwrap();
        fs::create_dir_all(root.join("play/game")).unwrap();

        let mut configuration = Configuration::default();
        configuration.groups.insert(
            "work".to_string(),
            RuleSet {
                bulk_add_dirs: vec![root.join("work")],
                ..Default::default()
            },
        );
        configuration.groups.insert(
            "play".to_string(),
            RuleSet {
                bulk_add_dirs: vec![root.join("play")],
                ..Default::default()
            },
        );
        configuration.groups.insert("empty".to_string(), RuleSet::default());

        let catalog = ProjectCatalog::new(configuration, ScanOptions::default());
        (temp_dir, root, catalog)
    }

    #[test]
    fn test_names_in_declaration_order() {
        let (_temp_dir, _root, catalog) = create_catalog();
        assert_eq!(catalog.list_group_names(), vec!["work", "play", "empty"]);
    }

    #[test]
    fn test_resolve_group() {
        let (_temp_dir, root, catalog) = create_catalog();
        let projects = catalog.resolve_group("work").unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects["api"], root.join("work/api"));
    }

    #[test]
    fn test_unknown_group_is_not_found() {
        let (_temp_dir, _root, catalog) = create_catalog();
        assert_eq!(
            catalog.resolve_group("missing"),
            Err(RegistryError::GroupNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_declared_empty_group_is_empty_map() {
        let (_temp_dir, _root, catalog) = create_catalog();
        assert!(catalog.resolve_group("empty").unwrap().is_empty());
    }

    #[test]
    fn test_groups_do_not_leak_into_global() {
        let (_temp_dir, _root, catalog) = create_catalog();
        assert!(catalog.resolve_global().is_empty());

        let all = catalog.groups().resolve_all();
        let names: Vec<&str> = all.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["work", "play", "empty"]);
        assert!(all[1].1.contains_key("game"));
    }
}
