//! Detect what a previous run left behind.

use std::fs;
use std::path::{Path, PathBuf};

/// Prior installation state of the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallState {
    /// No persisted environment file.
    Fresh,
    /// Environment file present; `populated_data_dirs` lists non-empty data directories.
    Configured { populated_data_dirs: Vec<PathBuf> },
}

impl InstallState {
    /// Both configuration and data exist, so the stack can be started as-is.
    pub fn can_start_existing(&self) -> bool {
        match self {
            InstallState::Configured { populated_data_dirs } => !populated_data_dirs.is_empty(),
            InstallState::Fresh => false,
        }
    }
}

pub fn detect(env_file: &Path, data_dirs: &[PathBuf]) -> InstallState {
    if fs::symlink_metadata(env_file).is_err() {
        return InstallState::Fresh;
    }
    let populated_data_dirs =
        data_dirs.iter().filter(|dir| is_populated_dir(dir)).cloned().collect();
    InstallState::Configured { populated_data_dirs }
}

fn is_populated_dir(path: &Path) -> bool {
    fs::read_dir(path).map(|mut entries| entries.next().is_some()).unwrap_or(false)
}
