//! Cache layout and refresh policy for fetched data files
//!
//! Files live at `<cache root>/<owner>/<repo>/<version>_<flattened path>`.
//! Release tags are treated as immutable and reused; anything else (branch
//! names) is purged before every fetch so it is never served stale.
//!
//! No locking is done: two runs refreshing the same branch at once may both
//! download. Writes go through a temp file and rename, so neither ever sees a
//! partial file.

use crate::error::{Error, Result};
use crate::remote::reference::ResolvedReference;
use colored::Colorize;
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether a version token may change content over time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    /// Looks like a release tag (`v1.2`, `2.0.3`)
    Immutable,
    /// Branch name or anything else
    Mutable,
}

impl VersionKind {
    pub fn classify(version: &str) -> Self {
        static RELEASE_TAG: OnceLock<Regex> = OnceLock::new();
        let re = RELEASE_TAG.get_or_init(|| Regex::new(r"^v?\d+\.\d+").expect("valid regex"));
        if re.is_match(version) {
            Self::Immutable
        } else {
            Self::Mutable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VersionKind::Immutable => "release tag",
            VersionKind::Mutable => "branch",
        }
    }
}

/// What to do with the cache entry before fetching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheAction {
    /// Immutable entry already present, serve it
    Reuse,
    /// Mutable entry present, delete then fetch
    Refresh,
    /// Nothing cached yet
    Fetch,
}

impl CacheAction {
    pub fn decide(kind: VersionKind, cached: bool) -> Self {
        match (kind, cached) {
            (_, false) => CacheAction::Fetch,
            (VersionKind::Immutable, true) => CacheAction::Reuse,
            (VersionKind::Mutable, true) => CacheAction::Refresh,
        }
    }
}

/// Cache directory layout rooted at a configurable directory
#[derive(Debug, Clone)]
pub struct DataCache {
    root: PathBuf,
}

impl DataCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding every cached file of one repository
    pub fn repo_dir(&self, reference: &ResolvedReference) -> PathBuf {
        self.root.join(&reference.owner).join(&reference.repository)
    }

    pub fn entry_path(&self, reference: &ResolvedReference) -> PathBuf {
        self.repo_dir(reference).join(reference.cache_file_name())
    }

    /// Create the repository cache directory if absent
    pub fn ensure_repo_dir(&self, reference: &ResolvedReference) -> Result<PathBuf> {
        let dir = self.repo_dir(reference);
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::io("Failed to create cache directory", &dir, e))?;
        Ok(dir)
    }

    /// Apply the refresh policy to the entry for `reference`
    ///
    /// A mutable entry is deleted here, before anything is downloaded.
    pub fn prepare(&self, reference: &ResolvedReference) -> Result<CacheAction> {
        let path = self.entry_path(reference);
        let kind = reference.kind();
        let action = CacheAction::decide(kind, path.is_file());

        match action {
            CacheAction::Refresh => {
                println!(
                    "{} {} from {} ({}: {})",
                    "Refreshing".cyan(),
                    reference.file_path,
                    reference.slug(),
                    kind.label(),
                    reference.version
                );
                std::fs::remove_file(&path)
                    .map_err(|e| Error::io("Failed to remove stale cache file", &path, e))?;
            }
            CacheAction::Reuse => {
                println!(
                    "{} {} from {} ({}: {})",
                    "Using cached".green(),
                    reference.file_path,
                    reference.slug(),
                    kind.label(),
                    reference.version
                );
            }
            CacheAction::Fetch => {}
        }

        Ok(action)
    }
}
