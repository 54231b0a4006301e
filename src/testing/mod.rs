mod fake_orchestrator;
mod scripted_prompter;

pub use fake_orchestrator::FakeOrchestrator;
pub use scripted_prompter::ScriptedPrompter;
