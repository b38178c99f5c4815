//! Recursive vault directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions (lowercase, without the dot) treated as markdown.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Walker for discovering markdown files in a vault.
///
/// Ignore rules are not applied here; every markdown file under the root is
/// yielded, hidden directories included.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
}

impl VaultWalker {
    /// Create a new walker for the given vault root.
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(root.display().to_string()))?;

        Ok(Self { root })
    }

    /// Lazily walk the vault, yielding absolute paths of markdown files.
    ///
    /// Entries are visited in file-name order. Symlinked directories are not
    /// followed; symlinks to markdown files are yielded.
    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf, VaultWalkerError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    (path.is_file() && is_markdown_file(path)).then(|| Ok(entry.into_path()))
                }
                Err(e) => {
                    Some(Err(VaultWalkerError::WalkError(self.root.display().to_string(), e)))
                }
            })
    }

    /// Get the vault root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Whether `path` has a markdown extension, compared case-insensitively.
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| MARKDOWN_EXTENSIONS.iter().any(|m| e.eq_ignore_ascii_case(m)))
}
