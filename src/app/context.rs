use std::path::{Path, PathBuf};

use crate::domain::InstallerConfig;
use crate::ports::{Orchestrator, Prompter};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: Prompter, O: Orchestrator> {
    root: PathBuf,
    config: InstallerConfig,
    prompter: P,
    orchestrator: O,
}

impl<P: Prompter, O: Orchestrator> AppContext<P, O> {
    /// Create a new application context rooted at the project directory.
    pub fn new(root: PathBuf, config: InstallerConfig, prompter: P, orchestrator: O) -> Self {
        Self { root, config, prompter, orchestrator }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn orchestrator(&self) -> &O {
        &self.orchestrator
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}
