//! Working-directory scan and backup-name filtering.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// File names starting with this prefix (case-insensitive) are never
/// touched.
pub const BACKUP_PREFIX: &str = "_backup";

/// Returns whether a file name marks a backup copy.
///
/// # Examples
/// ```
/// use rejpeg::scanner::is_backup_name;
///
/// assert!(is_backup_name("_backup_old.png"));
/// assert!(is_backup_name("_BACKUP (1).jpg"));
/// assert!(!is_backup_name("backup.png"));
/// assert!(!is_backup_name("photo_backup.png"));
/// ```
pub fn is_backup_name(name: &str) -> bool {
    name.to_lowercase().starts_with(BACKUP_PREFIX)
}

/// Collects the conversion candidates in `dir`: every regular file
/// whose name does not mark it as a backup. Non-recursive; directories
/// and symlinks to directories are skipped, symlinks to regular files
/// are kept. Listing order is whatever the filesystem yields.
///
/// Listing failures are fatal: an unreadable directory aborts the run.
pub fn collect_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("cannot list directory {}", dir.display()))?;

        if is_backup_name(&entry.file_name().to_string_lossy()) {
            continue;
        }
        // Path::is_file follows symlinks, so a link to a regular file
        // stays eligible while a link to a directory does not.
        if !entry.path().is_file() {
            continue;
        }

        candidates.push(entry.path().to_path_buf());
    }

    Ok(candidates)
}
