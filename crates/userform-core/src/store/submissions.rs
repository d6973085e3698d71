//! Ordered in-memory list of accepted records.

use crate::error::{Error, Result};
use crate::types::UserRecord;

/// Accepted records in insertion order. Entries are addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStore {
    records: Vec<UserRecord>,
}

impl SubmissionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, returning its index.
    pub fn append(&mut self, record: UserRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Overwrites the record at `index`, returning the previous value.
    pub fn replace(&mut self, index: usize, record: UserRecord) -> Result<UserRecord> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range("entry", index, len))?;
        Ok(std::mem::replace(slot, record))
    }

    /// Removes the record at `index`, shifting later records up.
    pub fn remove(&mut self, index: usize) -> Result<UserRecord> {
        self.entry(index)?;
        Ok(self.records.remove(index))
    }

    /// Record at `index`, or [`Error::OutOfRange`].
    pub fn entry(&self, index: usize) -> Result<&UserRecord> {
        self.records
            .get(index)
            .ok_or_else(|| Error::out_of_range("entry", index, self.records.len()))
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&UserRecord> {
        self.records.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been submitted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.records.iter()
    }

    /// All records as a slice.
    pub fn as_slice(&self) -> &[UserRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a SubmissionStore {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
