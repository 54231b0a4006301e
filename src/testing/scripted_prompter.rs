use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter that replays canned answers and records everything shown.
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: RefCell<VecDeque<String>>,
    passwords: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    selections: RefCell<VecDeque<usize>>,
    /// Answer `Cancelled` instead of failing once a queue runs dry.
    cancel_when_exhausted: bool,
    pub prompts: RefCell<Vec<String>>,
    pub said: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs<I: IntoIterator<Item = &'static str>>(self, answers: I) -> Self {
        self.inputs.borrow_mut().extend(answers.into_iter().map(String::from));
        self
    }

    pub fn passwords<I: IntoIterator<Item = &'static str>>(self, answers: I) -> Self {
        self.passwords.borrow_mut().extend(answers.into_iter().map(String::from));
        self
    }

    pub fn confirms<I: IntoIterator<Item = bool>>(self, answers: I) -> Self {
        self.confirms.borrow_mut().extend(answers);
        self
    }

    pub fn selections<I: IntoIterator<Item = usize>>(self, answers: I) -> Self {
        self.selections.borrow_mut().extend(answers);
        self
    }

    /// Behave like an operator pressing Ctrl-C after the scripted answers.
    pub fn then_cancel(mut self) -> Self {
        self.cancel_when_exhausted = true;
        self
    }

    pub fn count_said(&self, message: &str) -> usize {
        self.said.borrow().iter().filter(|line| line.as_str() == message).count()
    }

    pub fn said_containing(&self, fragment: &str) -> bool {
        self.said.borrow().iter().any(|line| line.contains(fragment))
    }

    fn next<T>(&self, queue: &RefCell<VecDeque<T>>, prompt: &str) -> Result<T, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match queue.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None if self.cancel_when_exhausted => Err(AppError::Cancelled),
            None => Err(AppError::prompt_error(format!("no scripted answer for '{}'", prompt))),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        self.next(&self.inputs, prompt)
    }

    fn password(&self, prompt: &str) -> Result<String, AppError> {
        self.next(&self.passwords, prompt)
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, AppError> {
        self.next(&self.confirms, prompt)
    }

    fn select(&self, prompt: &str, _items: &[&str], _default: usize) -> Result<usize, AppError> {
        self.next(&self.selections, prompt)
    }

    fn say(&self, message: &str) {
        self.said.borrow_mut().push(message.to_string());
    }
}
