//! Confirmation prompt trait.

/// A blocking yes/no prompt shown before destructive actions.
pub trait Confirm: Send + Sync {
    /// Ask the user; returns true if they agreed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// A prompt that always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
