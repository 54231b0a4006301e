use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for stackup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Template file is missing or unreadable.
    #[error("Template not available at {}: {source}", path.display())]
    TemplateUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backup requested for a path that does not exist.
    #[error("Cannot back up {}: nothing exists at that path", .0.display())]
    SourceMissing(PathBuf),

    /// Moving an existing entry to its backup name failed.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Password and confirmation entries differ.
    #[error("Passwords do not match")]
    ConfirmationMismatch,

    /// No usable container orchestrator was found.
    #[error("No container orchestrator available (tried: {0})")]
    OrchestratorUnavailable(String),

    /// The orchestrator was found but bringing the stack up failed.
    #[error("'{command}' failed: {details}")]
    OrchestratorInvocationFailed { command: String, details: String },

    /// Installer configuration failed validation.
    #[error("Invalid installer configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Terminal interaction failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Operator aborted the installer.
    #[error("Installation cancelled")]
    Cancelled,

    /// Requested credential length cannot satisfy the composition rules.
    #[error("Credential length {requested} is too short (minimum {minimum})")]
    CredentialLengthTooShort { requested: usize, minimum: usize },
}

impl AppError {
    pub fn prompt_error<S: Into<String>>(message: S) -> Self {
        AppError::Prompt(message.into())
    }

    /// Whether the error is an operator cancellation rather than a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}
