use std::cell::OnceCell;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::Orchestrator;

/// Docker Compose (or a compatible CLI) invoked as a child process.
#[derive(Debug, Clone)]
pub struct ComposeOrchestrator {
    candidates: Vec<Vec<String>>,
    selected: OnceCell<Vec<String>>,
}

impl ComposeOrchestrator {
    /// `candidates` are command prefixes such as `["docker", "compose"]`, tried in order.
    pub fn new(candidates: Vec<Vec<String>>) -> Self {
        Self { candidates, selected: OnceCell::new() }
    }

    fn command_for(prefix: &[String]) -> Option<Command> {
        let (program, args) = prefix.split_first()?;
        let mut command = Command::new(program);
        command.args(args);
        Some(command)
    }

    fn responds_to_version(prefix: &[String]) -> bool {
        let Some(mut command) = Self::command_for(prefix) else {
            return false;
        };
        command.arg("version").stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
        match command.status() {
            Ok(status) => status.success(),
            Err(err) => {
                tracing::debug!("'{}' could not be spawned: {}", prefix.join(" "), err);
                false
            }
        }
    }

    fn resolve(&self) -> Result<&[String], AppError> {
        if let Some(prefix) = self.selected.get() {
            return Ok(prefix.as_slice());
        }
        let found = self
            .candidates
            .iter()
            .find(|prefix| Self::responds_to_version(prefix))
            .cloned()
            .ok_or_else(|| AppError::OrchestratorUnavailable(self.tried()))?;
        tracing::info!("using orchestrator '{}'", found.join(" "));
        Ok(self.selected.get_or_init(|| found).as_slice())
    }

    fn tried(&self) -> String {
        self.candidates.iter().map(|prefix| prefix.join(" ")).collect::<Vec<_>>().join(", ")
    }
}

impl Orchestrator for ComposeOrchestrator {
    fn probe(&self) -> Result<(), AppError> {
        self.resolve().map(|_| ())
    }

    fn up(&self, project_dir: &Path) -> Result<(), AppError> {
        let prefix = self.resolve()?;
        let command_line = format!("{} up -d", prefix.join(" "));
        let mut command = Self::command_for(prefix)
            .ok_or_else(|| AppError::OrchestratorUnavailable(self.tried()))?;
        command.args(["up", "-d"]).current_dir(project_dir);

        tracing::info!("running '{}' in {}", command_line, project_dir.display());
        let status = command.status().map_err(|err| AppError::OrchestratorInvocationFailed {
            command: command_line.clone(),
            details: err.to_string(),
        })?;

        if !status.success() {
            return Err(AppError::OrchestratorInvocationFailed {
                command: command_line,
                details: format!("exited with {}", status),
            });
        }
        Ok(())
    }

    fn up_command(&self) -> String {
        let prefix = self.selected.get().or_else(|| self.candidates.first());
        match prefix {
            Some(prefix) => format!("{} up -d", prefix.join(" ")),
            None => "docker compose up -d".to_string(),
        }
    }
}
