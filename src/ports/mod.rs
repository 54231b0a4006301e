mod orchestrator;
mod prompter;

pub use orchestrator::Orchestrator;
pub use prompter::Prompter;
