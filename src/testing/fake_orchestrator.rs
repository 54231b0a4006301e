use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::Orchestrator;

/// Orchestrator double with configurable availability and outcome.
pub struct FakeOrchestrator {
    pub available: bool,
    pub fail_up: bool,
    pub up_calls: RefCell<Vec<PathBuf>>,
}

impl FakeOrchestrator {
    pub fn available() -> Self {
        Self { available: true, fail_up: false, up_calls: RefCell::new(Vec::new()) }
    }

    pub fn unavailable() -> Self {
        Self { available: false, ..Self::available() }
    }

    pub fn failing() -> Self {
        Self { fail_up: true, ..Self::available() }
    }

    pub fn up_count(&self) -> usize {
        self.up_calls.borrow().len()
    }
}

impl Orchestrator for FakeOrchestrator {
    fn probe(&self) -> Result<(), AppError> {
        if self.available {
            Ok(())
        } else {
            Err(AppError::OrchestratorUnavailable("fake compose".to_string()))
        }
    }

    fn up(&self, project_dir: &Path) -> Result<(), AppError> {
        self.up_calls.borrow_mut().push(project_dir.to_path_buf());
        if self.fail_up {
            return Err(AppError::OrchestratorInvocationFailed {
                command: self.up_command(),
                details: "exited with exit status: 1".to_string(),
            });
        }
        Ok(())
    }

    fn up_command(&self) -> String {
        "fake compose up -d".to_string()
    }
}
