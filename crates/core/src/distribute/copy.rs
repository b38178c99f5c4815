//! File and directory copying that carries timestamps along.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use super::DistributeError;

/// Copy `src` to `dest`, overwriting, then copy its access and modification times.
///
/// The parent of `dest` must already exist. Returns the number of bytes copied.
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<u64> {
    let bytes = fs::copy(src, dest)?;

    let meta = fs::metadata(src)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    File::open(dest)?.set_times(times)?;

    Ok(bytes)
}

/// Recursively copy the contents of `src` into `dest`, merging with whatever
/// `dest` already holds. Same-named files are overwritten, nothing is removed.
///
/// Symlinks are followed so linked content is copied rather than the link.
/// Returns the number of files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize, DistributeError> {
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry =
            entry.map_err(|e| DistributeError::AssetWalk(src.display().to_string(), e))?;
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(rel);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .map_err(|source| DistributeError::CreateDir { path: target, source })?;
        } else if file_type.is_file() {
            copy_file(entry.path(), &target).map_err(|source| DistributeError::Copy {
                from: entry.path().to_path_buf(),
                to: target,
                source,
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}
