//! Rotate existing files and directories out of the way before they are replaced.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Move `path` to the first free name among `path.bak`, `path.bak1`, `path.bak2`, ...
///
/// Returns the backup location. The entry at `path` must exist.
pub fn backup(path: &Path) -> Result<PathBuf, AppError> {
    if !entry_exists(path) {
        return Err(AppError::SourceMissing(path.to_path_buf()));
    }

    let target = free_backup_path(path);
    fs::rename(path, &target).map_err(|source| AppError::RenameFailed {
        from: path.to_path_buf(),
        to: target.clone(),
        source,
    })?;

    tracing::info!("backed up {} -> {}", path.display(), target.display());
    Ok(target)
}

/// [`backup`] when something exists at `path`, otherwise nothing.
pub fn backup_if_present(path: &Path) -> Result<Option<PathBuf>, AppError> {
    if entry_exists(path) { backup(path).map(Some) } else { Ok(None) }
}

fn free_backup_path(path: &Path) -> PathBuf {
    let mut attempt: u64 = 0;
    loop {
        let candidate = with_suffix(path, attempt);
        if !entry_exists(&candidate) {
            return candidate;
        }
        attempt += 1;
    }
}

fn with_suffix(path: &Path, attempt: u64) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    if attempt == 0 {
        name.push(".bak");
    } else {
        name.push(format!(".bak{}", attempt));
    }
    PathBuf::from(name)
}

/// Dangling symlinks count as occupied.
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
