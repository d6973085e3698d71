//! Form mode (the edit cursor).

use serde::{Deserialize, Serialize};

/// Whether the form is creating a new entry or editing a stored one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    /// Submitting appends a new entry.
    #[default]
    New,

    /// Submitting overwrites the entry at this index.
    Editing(usize),
}

impl FormMode {
    /// Returns `true` in [`FormMode::Editing`].
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Editing(_))
    }

    /// The index being edited, if any.
    pub fn editing_index(&self) -> Option<usize> {
        match self {
            FormMode::Editing(index) => Some(*index),
            FormMode::New => None,
        }
    }

    /// The mode after the store entry at `removed` has been deleted.
    ///
    /// Editing the removed entry falls back to `New`; editing a later entry
    /// follows it down by one; anything else is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use userform_core::FormMode;
    ///
    /// assert_eq!(FormMode::Editing(1).after_removal(0), FormMode::Editing(0));
    /// assert_eq!(FormMode::Editing(1).after_removal(1), FormMode::New);
    /// assert_eq!(FormMode::Editing(1).after_removal(2), FormMode::Editing(1));
    /// ```
    pub fn after_removal(self, removed: usize) -> FormMode {
        match self {
            FormMode::Editing(index) if index == removed => FormMode::New,
            FormMode::Editing(index) if index > removed => FormMode::Editing(index - 1),
            other => other,
        }
    }
}

impl std::fmt::Display for FormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormMode::New => write!(f, "new"),
            FormMode::Editing(index) => write!(f, "editing #{index}"),
        }
    }
}
