//! Reading and writing environment files on disk.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::domain::{AppError, EnvDocument};

/// Load the shipped template. Any read failure is [`AppError::TemplateUnavailable`].
pub fn load_template(path: &Path) -> Result<EnvDocument, AppError> {
    read_text(path).map(|content| EnvDocument::parse(&content))
}

/// Read a template-like text file (env template or proxy template).
pub fn read_text(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| {
        tracing::error!("template {} unavailable: {}", path.display(), source);
        AppError::TemplateUnavailable { path: path.to_path_buf(), source }
    })
}

/// Load the persisted environment file, if there is one.
pub fn load_persisted(path: &Path) -> Result<Option<EnvDocument>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(EnvDocument::parse(&content))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Write `content`, creating parent directories.
///
/// On unix the file is owner-only from the moment it is created, since it holds credentials.
pub fn write_private(path: &Path, content: &str) -> Result<(), AppError> {
    create_parent(path)?;
    let mut file = open_private(path)?;
    file.write_all(content.as_bytes())?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file =
        OpenOptions::new().write(true).create(true).truncate(true).mode(0o600).open(path)?;
    // `mode` only applies on creation; an existing file keeps its bits until reset here.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

/// Write `content`, creating parent directories.
pub fn write_public(path: &Path, content: &str) -> Result<(), AppError> {
    create_parent(path)?;
    fs::write(path, content)?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

fn create_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
