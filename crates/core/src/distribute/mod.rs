//! Distribution orchestration: classify every note and copy it into its repo.

pub mod copy;
pub mod report;

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::arm;
use crate::config::types::{Destinations, RepoTarget, ResolvedConfig};
use crate::frontmatter::{
    HeaderDecoder, MissingDecoder, ParsedDocument, default_decoder, parse_with,
};
use crate::paths::sanitize_relative;
use crate::vault::{VaultWalker, VaultWalkerError};

pub use copy::{copy_file, copy_tree};
pub use report::{DistributionReport, RepoSummary};

/// Asset directories mirrored from the vault root into every repository.
pub const ASSET_DIRS: [&str; 5] = ["assets", "img", "images", "figures", "attachments"];

/// Top-level vault directories that never contain publishable notes.
pub const IGNORE_TOP_LEVEL: [&str; 3] = [".obsidian", ".git", "node_modules"];

#[derive(Debug, Error)]
pub enum DistributeError {
    #[error(transparent)]
    MissingDecoder(#[from] MissingDecoder),

    #[error("Vault walker error: {0}")]
    Walker(#[from] VaultWalkerError),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk asset directory {0}: {1}")]
    AssetWalk(String, #[source] walkdir::Error),
}

/// Whether a vault-relative path lives under an ignored or hidden top-level entry.
pub fn should_skip(rel_path: &Path) -> bool {
    match rel_path.components().next() {
        Some(Component::Normal(top)) => {
            let top = top.to_string_lossy();
            IGNORE_TOP_LEVEL.iter().any(|d| *d == top) || top.starts_with('.')
        }
        _ => false,
    }
}

/// Copies vault notes into per-arm MkDocs repositories.
pub struct Distributor {
    vault_root: PathBuf,
    destinations: Destinations,
    decoder: Box<dyn HeaderDecoder>,
}

impl Distributor {
    /// Create a distributor with an explicit frontmatter decoder.
    pub fn new(
        vault_root: &Path,
        destinations: Destinations,
        decoder: Box<dyn HeaderDecoder>,
    ) -> Self {
        Self { vault_root: vault_root.to_path_buf(), destinations, decoder }
    }

    /// Create a distributor using the decoder compiled into this build.
    ///
    /// Fails before touching the filesystem when no decoder is available.
    pub fn from_config(cfg: &ResolvedConfig) -> Result<Self, DistributeError> {
        let decoder = default_decoder()?;
        Ok(Self::new(&cfg.vault_root, cfg.destinations.clone(), decoder))
    }

    pub fn destinations(&self) -> &Destinations {
        &self.destinations
    }

    /// Create `docs/` and every asset directory in each repository.
    /// Existing directories and their contents are left untouched.
    pub fn ensure_repo_structure(&self) -> Result<(), DistributeError> {
        for target in self.destinations.iter() {
            let docs = target.docs_path();
            let dirs = std::iter::once(docs.clone()).chain(ASSET_DIRS.iter().map(|a| docs.join(a)));
            for dir in dirs {
                fs::create_dir_all(&dir)
                    .map_err(|source| DistributeError::CreateDir { path: dir, source })?;
            }
        }
        Ok(())
    }

    /// Read a note and split off its frontmatter. Invalid UTF-8 is replaced.
    pub fn read_note(&self, path: &Path) -> Result<ParsedDocument, DistributeError> {
        let bytes = fs::read(path)
            .map_err(|source| DistributeError::FileRead { path: path.to_path_buf(), source })?;
        Ok(parse_with(self.decoder.as_ref(), &String::from_utf8_lossy(&bytes)))
    }

    /// Repository a parsed note belongs to.
    pub fn resolve_arm(&self, doc: &ParsedDocument) -> &RepoTarget {
        arm::resolve(&doc.frontmatter, &self.destinations)
    }

    /// Copy a note to `docs/<rel>` of `target`, creating parent directories.
    /// Returns the destination path.
    pub fn copy_markdown(
        &self,
        src: &Path,
        target: &RepoTarget,
        rel: &Path,
    ) -> Result<PathBuf, DistributeError> {
        let dest = target.docs_path().join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| DistributeError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        copy_file(src, &dest).map_err(|source| DistributeError::Copy {
            from: src.to_path_buf(),
            to: dest.clone(),
            source,
        })?;
        Ok(dest)
    }

    /// Mirror every asset directory present at the vault root into each repository.
    pub fn copy_assets(&self, report: &mut DistributionReport) -> Result<(), DistributeError> {
        for asset in ASSET_DIRS {
            let source = self.vault_root.join(asset);
            if !source.is_dir() {
                continue;
            }
            report.asset_dirs.push(asset.to_string());
            for target in self.destinations.iter() {
                let copied = copy_tree(&source, &target.docs_path().join(asset))?;
                tracing::debug!(asset, arm = %target.arm, copied, "mirrored asset directory");
                report.asset_files_copied += copied;
            }
        }
        Ok(())
    }

    /// Run a full distribution.
    ///
    /// Not transactional: the first IO error aborts the run and leaves
    /// everything copied so far in place. Files already present in a
    /// repository are overwritten but never removed.
    pub fn distribute(&self) -> Result<DistributionReport, DistributeError> {
        let start = Instant::now();

        let walker = VaultWalker::new(&self.vault_root)?;
        let mut report = DistributionReport::new(walker.root().to_path_buf(), &self.destinations);

        self.ensure_repo_structure()?;
        tracing::info!(vault = %walker.root().display(), "distributing notes");

        for path in walker.iter() {
            let path = path?;
            report.files_found += 1;

            let rel = path.strip_prefix(walker.root()).unwrap_or(&path);
            if should_skip(rel) {
                tracing::trace!(path = %rel.display(), "skipping ignored note");
                report.notes_skipped += 1;
                continue;
            }

            let doc = self.read_note(&path)?;
            if let Some(ref e) = doc.header_error {
                tracing::debug!(path = %rel.display(), "bad frontmatter, using default arm: {e}");
                report.header_errors += 1;
            }

            let target = self.resolve_arm(&doc);
            let safe_rel = sanitize_relative(rel);
            let dest = self.copy_markdown(&path, target, &safe_rel)?;
            tracing::debug!(arm = %target.arm, dest = %dest.display(), "copied note");
            report.record_note(target.arm);
        }

        self.copy_assets(&mut report)?;

        report.duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            copied = report.total_notes_copied(),
            skipped = report.notes_skipped,
            "distribution complete"
        );
        Ok(report)
    }
}
