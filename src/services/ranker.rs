use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::models::ProjectMap;

/// Timestamp used for projects that cannot be stat-ed.
pub const OLDEST: SystemTime = UNIX_EPOCH;

/// A project with the newest modification time found in its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedProject {
    pub name: String,
    pub path: Utf8PathBuf,
    pub latest_modified: SystemTime,
}

/// Orders projects most-recently-modified first.
///
/// Each project's timestamp is the newest of the directory itself and every
/// file below it. Timestamps are computed in parallel; the sort is stable, so
/// projects with equal timestamps keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecencyRanker;

impl RecencyRanker {
    pub fn new() -> Self {
        Self
    }

    pub fn rank(&self, projects: ProjectMap) -> ProjectMap {
        self.rank_detailed(projects)
            .into_iter()
            .map(|ranked| (ranked.name, ranked.path))
            .collect()
    }

    pub fn rank_detailed(&self, projects: ProjectMap) -> Vec<RankedProject> {
        let entries: Vec<(String, Utf8PathBuf)> = projects.into_iter().collect();

        let mut ranked: Vec<RankedProject> = entries
            .into_par_iter()
            .map(|(name, path)| {
                let latest_modified = latest_modified(&path);
                RankedProject {
                    name,
                    path,
                    latest_modified,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.latest_modified.cmp(&a.latest_modified));
        ranked
    }
}

/// Newest modification time of `path` and every file in its subtree.
///
/// Returns [`OLDEST`] when `path` itself cannot be stat-ed. Files that vanish
/// or cannot be read during the walk are skipped.
pub fn latest_modified(path: &Utf8Path) -> SystemTime {
    let mut latest = match fs::metadata(path).and_then(|meta| meta.modified()) {
        Ok(modified) => modified,
        Err(e) => {
            tracing::debug!("Cannot stat project {}: {}", path, e);
            return OLDEST;
        }
    };

    for entry in WalkDir::new(path)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
    {
        // Follows symlinked files; symlinked directories are not counted.
        let Ok(meta) = fs::metadata(entry.path()) else {
            continue;
        };
        if meta.is_dir() {
            continue;
        }
        if let Ok(modified) = meta.modified() {
            latest = latest.max(modified);
        }
    }

    latest
}
