//! API facade for the installer.
//!
//! Glues context creation to command execution.

use std::path::PathBuf;

use crate::adapters::{ComposeOrchestrator, TerminalPrompter};
use crate::app::AppContext;
use crate::app::commands::install;
use crate::app::config::load_installer_config;
use crate::ports::{Orchestrator, Prompter};

pub use crate::app::commands::install::{ConfigureReport, InstallOutcome};
pub use crate::app::commands::stack::StackStatus;
pub use crate::domain::AppError;

/// Run the interactive installer in the current directory.
pub fn install() -> Result<InstallOutcome, AppError> {
    let root = std::env::current_dir()?;
    let config = load_installer_config(&root)?;
    let orchestrator = ComposeOrchestrator::new(config.orchestrator.commands.clone());
    let ctx = AppContext::new(root, config, TerminalPrompter::new(), orchestrator);
    install::execute(&ctx)
}

/// Run the installer at `root` with the given prompter and orchestrator.
pub fn install_at<P: Prompter, O: Orchestrator>(
    root: impl Into<PathBuf>,
    prompter: P,
    orchestrator: O,
) -> Result<InstallOutcome, AppError> {
    let root = root.into();
    let config = load_installer_config(&root)?;
    let ctx = AppContext::new(root, config, prompter, orchestrator);
    install::execute(&ctx)
}
