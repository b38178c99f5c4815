//! Outcome of a distribution run.

use std::path::PathBuf;

use serde::Serialize;

use crate::arm::Arm;
use crate::config::types::Destinations;

/// Per-repository part of a [`DistributionReport`].
#[derive(Debug, Clone, Serialize)]
pub struct RepoSummary {
    pub arm: Arm,
    /// The repository's `docs` directory.
    pub docs_path: PathBuf,
    /// Notes copied into this repository during the run.
    pub notes_copied: usize,
}

/// Statistics from a distribution run.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionReport {
    pub vault_root: PathBuf,
    /// One entry per arm, in public, research, private order.
    pub repos: Vec<RepoSummary>,
    /// Markdown files discovered by the walker.
    pub files_found: usize,
    /// Files under ignored or hidden top-level directories.
    pub notes_skipped: usize,
    /// Notes whose header block was present but did not decode to a mapping.
    pub header_errors: usize,
    /// Asset directories found in the vault and mirrored into every repo.
    pub asset_dirs: Vec<String>,
    /// Asset files copied, summed over all repositories.
    pub asset_files_copied: usize,
    pub duration_ms: u64,
}

impl DistributionReport {
    pub fn new(vault_root: PathBuf, destinations: &Destinations) -> Self {
        Self {
            vault_root,
            repos: destinations
                .iter()
                .map(|t| RepoSummary { arm: t.arm, docs_path: t.docs_path(), notes_copied: 0 })
                .collect(),
            files_found: 0,
            notes_skipped: 0,
            header_errors: 0,
            asset_dirs: Vec::new(),
            asset_files_copied: 0,
            duration_ms: 0,
        }
    }

    pub(crate) fn record_note(&mut self, arm: Arm) {
        if let Some(repo) = self.repos.iter_mut().find(|r| r.arm == arm) {
            repo.notes_copied += 1;
        }
    }

    /// Number of notes copied into the repository of `arm`.
    pub fn notes_copied(&self, arm: Arm) -> usize {
        self.repos.iter().find(|r| r.arm == arm).map_or(0, |r| r.notes_copied)
    }

    /// Number of notes copied across all repositories.
    pub fn total_notes_copied(&self) -> usize {
        self.repos.iter().map(|r| r.notes_copied).sum()
    }
}
