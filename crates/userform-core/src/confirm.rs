//! Confirmation prompt seam.
//!
//! Destructive session operations ask a [`Confirm`] implementation before
//! mutating anything. A `false` answer aborts the operation with no state
//! change.

/// A blocking yes/no prompt.
pub trait Confirm {
    /// Asks `prompt`, returning `true` to proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answers yes to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
