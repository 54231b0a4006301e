//! stackup: interactive installer that turns a shipped `.env` template into a
//! working configuration and brings the stack up.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{ComposeOrchestrator, TerminalPrompter};
pub use app::api::{
    AppError, ConfigureReport, InstallOutcome, StackStatus, install, install_at,
};
pub use domain::{EnvDocument, InstallerConfig, Language, OverrideSet, synthesize};
pub use ports::{Orchestrator, Prompter};
