//! Installer configuration loading from the project root.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::installer_config::CONFIG_FILE;
use crate::domain::{AppError, InstallerConfig, parse_config_content};

/// Load `installer.toml` from `root`, falling back to defaults when it is absent.
pub fn load_installer_config(root: &Path) -> Result<InstallerConfig, AppError> {
    let path = root.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::info!("loading installer configuration from {}", path.display());
            parse_config_content(&content)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE);
            Ok(InstallerConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}
