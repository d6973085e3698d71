//! Collected validation results.

use std::fmt;

use super::schema::{FieldError, FieldKey};

/// Every failed rule of a validation pass, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<(FieldKey, FieldError)>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure.
    pub fn push(&mut self, key: FieldKey, error: FieldError) {
        self.errors.push((key, error));
    }

    /// Returns `true` if no rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if there are no failures.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors recorded for one field.
    pub fn errors_for(&self, key: FieldKey) -> Vec<&FieldError> {
        self.errors
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, e)| e)
            .collect()
    }

    /// Returns `true` if `key` has at least one error.
    pub fn has_errors(&self, key: FieldKey) -> bool {
        self.errors.iter().any(|(k, _)| *k == key)
    }

    /// Iterates over `(field, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(FieldKey, FieldError)> {
        self.errors.iter()
    }

    /// Keeps only the errors whose field satisfies `keep`.
    pub(crate) fn retain_fields<F>(&mut self, mut keep: F)
    where
        F: FnMut(FieldKey) -> bool,
    {
        self.errors.retain(|(k, _)| keep(*k));
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        for (i, (key, error)) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key}: {error}")?;
        }
        Ok(())
    }
}
