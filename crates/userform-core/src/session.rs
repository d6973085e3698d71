//! Session-scoped form controller.
//!
//! [`FormSession`] owns the live form, the submission store, the current
//! [`FormMode`] and a shared reference to the country table. Every operation
//! runs to completion synchronously and leaves the session untouched when it
//! fails.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::confirm::Confirm;
use crate::error::Result;
use crate::form::{FieldKey, FormState, ValidationReport};
use crate::store::{FormMode, SubmissionStore};
use crate::types::{CountryTable, UserRecord};

/// Behavior switches for the two phone-slot edge cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPolicy {
    /// Refuse to remove the last remaining phone slot.
    pub keep_one_phone_slot: bool,

    /// When loading an entry for editing, drop the blank default phone slot
    /// before appending the stored numbers.
    pub replace_default_phone_slot: bool,
}

/// Result of [`FormSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitOutcome {
    /// A new entry was added at `index`.
    Appended {
        /// Index of the new entry
        index: usize,
    },

    /// The entry at `index` was overwritten.
    Updated {
        /// Index of the overwritten entry
        index: usize,
        /// The value that was replaced
        previous: UserRecord,
    },

    /// The form failed validation; nothing was stored.
    Rejected(ValidationReport),
}

impl SubmitOutcome {
    /// Returns `true` if the form value was stored.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::Appended { .. } | SubmitOutcome::Updated { .. }
        )
    }

    /// Returns `true` if validation failed.
    pub fn is_rejected(&self) -> bool {
        matches!(self, SubmitOutcome::Rejected(_))
    }
}

/// Result of [`FormSession::delete_entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeleteOutcome {
    /// The entry was removed.
    Deleted(UserRecord),

    /// The confirmation prompt was declined.
    Cancelled,
}

impl DeleteOutcome {
    /// Returns `true` if an entry was removed.
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }
}

/// One user's form, submitted records and edit cursor.
#[derive(Debug, Clone)]
pub struct FormSession {
    countries: Arc<CountryTable>,
    policy: FormPolicy,
    form: FormState,
    store: SubmissionStore,
    mode: FormMode,
}

impl FormSession {
    /// Creates a session with a blank form and an empty store.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use userform_core::{CountryTable, FieldKey, FormMode, FormSession};
    ///
    /// let mut session = FormSession::new(Arc::new(CountryTable::builtin()));
    /// session.set_field(FieldKey::Name, "A").unwrap();
    /// session.set_field(FieldKey::Email, "a@b.com").unwrap();
    /// session.set_field(FieldKey::City, "X").unwrap();
    /// session.set_field(FieldKey::Country, "US").unwrap();
    /// session.set_field(FieldKey::Phone(0), "1234567890").unwrap();
    ///
    /// assert!(session.submit().unwrap().is_accepted());
    /// assert_eq!(session.store().len(), 1);
    /// assert_eq!(session.mode(), FormMode::New);
    /// ```
    pub fn new(countries: Arc<CountryTable>) -> Self {
        Self {
            countries,
            policy: FormPolicy::default(),
            form: FormState::new(),
            store: SubmissionStore::new(),
            mode: FormMode::New,
        }
    }

    /// Replaces the phone-slot policy.
    pub fn with_policy(mut self, policy: FormPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The live form.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access to the live form (touch tracking, direct edits).
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Accepted records.
    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    /// Current mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Country table used for validation and display.
    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    /// Active policy.
    pub fn policy(&self) -> FormPolicy {
        self.policy
    }

    /// Sets a field from user input.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) -> Result<()> {
        self.form.set_value(key, value)
    }

    /// Appends an empty phone slot.
    pub fn add_phone_slot(&mut self) {
        self.form.add_phone_slot();
        tracing::debug!(slots = self.form.phone_count(), "Phone slot added");
    }

    /// Removes a phone slot. Out-of-range indices are ignored, as is removing
    /// the last slot when the policy keeps one.
    pub fn remove_phone_slot(&mut self, index: usize) -> bool {
        if self.policy.keep_one_phone_slot && self.form.phone_count() <= 1 {
            tracing::debug!(index, "Refusing to remove the last phone slot");
            return false;
        }
        let removed = self.form.remove_phone_slot(index);
        if removed {
            tracing::debug!(index, slots = self.form.phone_count(), "Phone slot removed");
        }
        removed
    }

    /// Validates the live form.
    pub fn validate(&self) -> ValidationReport {
        self.form.validate(&self.countries)
    }

    /// Returns `true` iff the live form passes every rule.
    pub fn is_valid(&self) -> bool {
        self.form.is_valid(&self.countries)
    }

    /// Submits the live form.
    ///
    /// An invalid form is marked touched and submitted, and nothing else
    /// changes. A valid form is appended in [`FormMode::New`] or overwrites
    /// the edited entry in [`FormMode::Editing`], after which the mode returns
    /// to `New` and the form is reset.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let report = self.validate();
        if !report.is_valid() {
            self.form.mark_all_touched();
            self.form.mark_submitted();
            tracing::warn!(errors = report.len(), mode = %self.mode, "Form invalid");
            return Ok(SubmitOutcome::Rejected(report));
        }

        let record = self.form.value();
        tracing::debug!(?record, "Form data");
        let outcome = match self.mode {
            FormMode::Editing(index) => {
                let previous = self.store.replace(index, record)?;
                tracing::info!(index, "Entry updated");
                SubmitOutcome::Updated { index, previous }
            }
            FormMode::New => {
                let index = self.store.append(record);
                tracing::info!(index, "Entry appended");
                SubmitOutcome::Appended { index }
            }
        };
        self.mode = FormMode::New;
        self.reset_form();
        Ok(outcome)
    }

    /// Loads the entry at `index` into the form for editing.
    ///
    /// The form is reset first, so unless the policy replaces it the blank
    /// default phone slot stays in front of the stored numbers.
    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        let record = self.store.entry(index)?.clone();

        self.mode = FormMode::Editing(index);
        self.reset_form();
        self.form.patch_scalars(&record);
        if self.policy.replace_default_phone_slot {
            self.form.clear_phones();
        }
        for phone in record.phone_numbers {
            self.form.push_phone(phone);
        }
        tracing::debug!(index, slots = self.form.phone_count(), "Editing entry");
        Ok(())
    }

    /// Abandons an in-progress edit and resets the form.
    pub fn cancel_edit(&mut self) {
        if let FormMode::Editing(index) = self.mode {
            tracing::debug!(index, "Edit cancelled");
        }
        self.mode = FormMode::New;
        self.reset_form();
    }

    /// Deletes the entry at `index` after `confirm` agrees.
    ///
    /// Deleting the entry under edit drops back to [`FormMode::New`] and
    /// resets the form; deleting an earlier entry shifts the edit cursor down
    /// by one.
    pub fn delete_entry<C>(&mut self, index: usize, confirm: &mut C) -> Result<DeleteOutcome>
    where
        C: Confirm + ?Sized,
    {
        let prompt = format!("Delete entry #{index} ({})?", self.store.entry(index)?.name);
        if !confirm.confirm(&prompt) {
            tracing::debug!(index, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.store.remove(index)?;
        let next = self.mode.after_removal(index);
        if self.mode.is_editing() && next == FormMode::New {
            self.reset_form();
        }
        self.mode = next;
        tracing::info!(index, mode = %self.mode, "Entry deleted");
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Display name for a country code, `""` when unknown.
    pub fn lookup_country_name(&self, code: &str) -> &str {
        self.countries.lookup_name(code)
    }

    /// Stored records paired with their country display names.
    pub fn records_with_country_names(&self) -> Vec<(&UserRecord, &str)> {
        self.store
            .iter()
            .map(|record| (record, self.lookup_country_name(&record.address.country)))
            .collect()
    }

    /// Rebuilds the blank form, clearing touched and submitted flags.
    ///
    /// The mode is not changed.
    pub fn reset_form(&mut self) {
        self.form = FormState::new();
    }
}
