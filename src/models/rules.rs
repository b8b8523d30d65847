use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;

/// Resolved projects keyed by name.
///
/// Iteration order is meaningful: after ranking it is most-recent-first.
pub type ProjectMap = IndexMap<String, Utf8PathBuf>;

/// Suppresses one bulk-add candidate.
///
/// A candidate is dropped only when it was found as an immediate child of exactly
/// `parent`. Specific projects are never affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    pub excluded: Utf8PathBuf,
    pub parent: Utf8PathBuf,
}

impl ExclusionRule {
    pub fn new(excluded: impl Into<Utf8PathBuf>, parent: impl Into<Utf8PathBuf>) -> Self {
        Self {
            excluded: excluded.into(),
            parent: parent.into(),
        }
    }

    /// Whether this rule removes `candidate` discovered under `parent`.
    pub fn matches(&self, candidate: &Utf8Path, parent: &Utf8Path) -> bool {
        self.parent == parent && self.excluded == candidate
    }
}

/// Rules for one scope: the global scope or a single group.
///
/// All paths are absolute; `~` forms have already been expanded by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// Directories whose immediate subdirectories are projects
    pub bulk_add_dirs: Vec<Utf8PathBuf>,

    /// Projects registered one by one, keyed by directory basename
    pub specific_projects: IndexMap<String, Utf8PathBuf>,

    /// Exclusions applied during bulk-add expansion
    pub remove_rules: Vec<ExclusionRule>,
}

impl RuleSet {
    pub fn is_empty(&self) -> bool {
        self.bulk_add_dirs.is_empty()
            && self.specific_projects.is_empty()
            && self.remove_rules.is_empty()
    }

    /// Whether any exclusion rule drops `candidate` found under `parent`.
    pub fn is_excluded(&self, candidate: &Utf8Path, parent: &Utf8Path) -> bool {
        self.remove_rules
            .iter()
            .any(|rule| rule.matches(candidate, parent))
    }
}

/// Parsed rule document: the global scope plus named groups in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub global: RuleSet,
    pub groups: IndexMap<String, RuleSet>,
}
