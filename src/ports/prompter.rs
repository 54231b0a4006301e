use crate::domain::AppError;

/// Terminal interaction used by the installer.
///
/// Every method returns [`AppError::Cancelled`] when the operator aborts the prompt.
pub trait Prompter {
    /// Free-form line of text; may be empty.
    fn input(&self, prompt: &str) -> Result<String, AppError>;

    /// Masked line of text; may be empty.
    fn password(&self, prompt: &str) -> Result<String, AppError>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;

    /// Pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize, AppError>;

    /// Print a line for the operator.
    fn say(&self, message: &str);
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn input(&self, prompt: &str) -> Result<String, AppError> {
        (**self).input(prompt)
    }

    fn password(&self, prompt: &str) -> Result<String, AppError> {
        (**self).password(prompt)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        (**self).confirm(prompt, default)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize, AppError> {
        (**self).select(prompt, items, default)
    }

    fn say(&self, message: &str) {
        (**self).say(message)
    }
}
