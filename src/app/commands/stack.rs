//! Bringing the stack up through the orchestrator.

use crate::app::AppContext;
use crate::domain::{AppError, Messages};
use crate::ports::{Orchestrator, Prompter};

/// What happened to the stack at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackStatus {
    Started,
    /// The operator chose not to start it.
    Skipped,
    /// No orchestrator was found; manual instructions were printed.
    Unavailable,
}

/// Whether an orchestrator can be used, printing manual instructions when not.
pub fn check_available<P: Prompter, O: Orchestrator>(
    ctx: &AppContext<P, O>,
    messages: &Messages,
) -> Result<bool, AppError> {
    match ctx.orchestrator().probe() {
        Ok(()) => Ok(true),
        Err(AppError::OrchestratorUnavailable(tried)) => {
            tracing::warn!("no orchestrator available (tried: {})", tried);
            ctx.prompter().say(messages.orchestrator_missing);
            print_manual_instructions(ctx, messages);
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

/// Run the orchestrator's up command in the project root.
pub fn start<P: Prompter, O: Orchestrator>(
    ctx: &AppContext<P, O>,
    messages: &Messages,
) -> Result<StackStatus, AppError> {
    ctx.prompter().say(messages.starting);
    ctx.orchestrator().up(ctx.root())?;
    ctx.prompter().say(messages.started);
    Ok(StackStatus::Started)
}

pub fn print_manual_instructions<P: Prompter, O: Orchestrator>(
    ctx: &AppContext<P, O>,
    messages: &Messages,
) {
    ctx.prompter().say(messages.start_manually);
    let command = ctx.orchestrator().up_command();
    ctx.prompter().say(&format!("  cd {} && {}", ctx.root().display(), command));
}
