use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Password, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn map_prompt_error(err: DialoguerError, what: &str) -> AppError {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => AppError::Cancelled,
        err => AppError::prompt_error(format!("Failed to read {}: {}", what, err)),
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(|err| map_prompt_error(err, "input"))
    }

    fn password(&self, prompt: &str) -> Result<String, AppError> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map(|value| value.trim().to_string())
            .map_err(|err| map_prompt_error(err, "password"))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|err| map_prompt_error(err, "answer"))?
            .ok_or(AppError::Cancelled)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(|err| map_prompt_error(err, "selection"))?
            .ok_or(AppError::Cancelled)
    }

    fn say(&self, message: &str) {
        println!("{}", message);
    }
}
