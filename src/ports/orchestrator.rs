use std::path::Path;

use crate::domain::AppError;

/// Container orchestrator that runs the stack.
pub trait Orchestrator {
    /// Check that the orchestrator can be invoked.
    ///
    /// Fails with [`AppError::OrchestratorUnavailable`] when it cannot.
    fn probe(&self) -> Result<(), AppError>;

    /// Bring the stack up detached from `project_dir`.
    fn up(&self, project_dir: &Path) -> Result<(), AppError>;

    /// Command line an operator can run by hand.
    fn up_command(&self) -> String;
}

impl<T: Orchestrator + ?Sized> Orchestrator for &T {
    fn probe(&self) -> Result<(), AppError> {
        (**self).probe()
    }

    fn up(&self, project_dir: &Path) -> Result<(), AppError> {
        (**self).up(project_dir)
    }

    fn up_command(&self) -> String {
        (**self).up_command()
    }
}
