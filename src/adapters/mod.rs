pub mod compose_orchestrator;
pub mod terminal_prompter;

pub use compose_orchestrator::ComposeOrchestrator;
pub use terminal_prompter::TerminalPrompter;
