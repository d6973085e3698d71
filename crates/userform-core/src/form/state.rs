//! Live form state.

use super::report::ValidationReport;
use super::schema::{FieldKey, rules_for};
use crate::error::{Error, Result};
use crate::types::{Address, CountryTable, UserRecord};

/// Value and interaction flags of one form leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    touched: bool,
    dirty: bool,
}

impl FieldState {
    /// An empty, untouched field.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the user has left this field (or a submit was attempted).
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Whether the user has changed the value.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn set_user_value(&mut self, value: String) {
        self.value = value;
        self.dirty = true;
    }
}

/// The `address` sub-group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressGroup {
    /// `address.city`
    pub city: FieldState,
    /// `address.country`
    pub country: FieldState,
}

/// The contact form: two scalar fields, an address group and a
/// variable-length list of phone entries.
///
/// Validity is never stored; it is derived from the schema on each call to
/// [`FormState::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    name: FieldState,
    email: FieldState,
    address: AddressGroup,
    phone_numbers: Vec<FieldState>,
    submitted: bool,
}

impl FormState {
    /// Builds a blank form with a single empty phone entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use userform_core::{CountryTable, FormState};
    ///
    /// let form = FormState::new();
    /// assert_eq!(form.phone_count(), 1);
    /// assert!(!form.is_valid(&CountryTable::builtin()));
    /// ```
    pub fn new() -> Self {
        Self {
            name: FieldState::new(),
            email: FieldState::new(),
            address: AddressGroup::default(),
            phone_numbers: vec![FieldState::new()],
            submitted: false,
        }
    }

    /// Looks up a field. `None` for a phone index past the end.
    pub fn field(&self, key: FieldKey) -> Option<&FieldState> {
        match key {
            FieldKey::Name => Some(&self.name),
            FieldKey::Email => Some(&self.email),
            FieldKey::City => Some(&self.address.city),
            FieldKey::Country => Some(&self.address.country),
            FieldKey::Phone(index) => self.phone_numbers.get(index),
        }
    }

    fn field_mut(&mut self, key: FieldKey) -> Result<&mut FieldState> {
        let len = self.phone_numbers.len();
        match key {
            FieldKey::Name => Ok(&mut self.name),
            FieldKey::Email => Ok(&mut self.email),
            FieldKey::City => Ok(&mut self.address.city),
            FieldKey::Country => Ok(&mut self.address.country),
            FieldKey::Phone(index) => self
                .phone_numbers
                .get_mut(index)
                .ok_or_else(|| Error::out_of_range("phone slot", index, len)),
        }
    }

    /// Sets a field's value as user input, marking it dirty.
    pub fn set_value(&mut self, key: FieldKey, value: impl Into<String>) -> Result<()> {
        self.field_mut(key)?.set_user_value(value.into());
        Ok(())
    }

    /// Marks one field as touched.
    pub fn touch(&mut self, key: FieldKey) -> Result<()> {
        self.field_mut(key)?.touched = true;
        Ok(())
    }

    /// Every leaf paired with its key.
    pub fn fields(&self) -> Vec<(FieldKey, &FieldState)> {
        let mut fields = vec![
            (FieldKey::Name, &self.name),
            (FieldKey::Email, &self.email),
            (FieldKey::City, &self.address.city),
            (FieldKey::Country, &self.address.country),
        ];
        fields.extend(
            self.phone_numbers
                .iter()
                .enumerate()
                .map(|(i, field)| (FieldKey::Phone(i), field)),
        );
        fields
    }

    /// Number of phone entries.
    pub fn phone_count(&self) -> usize {
        self.phone_numbers.len()
    }

    /// Appends one empty phone entry.
    pub fn add_phone_slot(&mut self) {
        self.phone_numbers.push(FieldState::new());
    }

    /// Appends a phone entry pre-filled with `value` (edit loading).
    pub(crate) fn push_phone(&mut self, value: impl Into<String>) {
        self.phone_numbers.push(FieldState::with_value(value));
    }

    /// Removes the phone entry at `index`, shifting later entries up.
    ///
    /// Out-of-range indices are ignored. Returns whether an entry was removed.
    /// The list may become empty.
    pub fn remove_phone_slot(&mut self, index: usize) -> bool {
        if index >= self.phone_numbers.len() {
            return false;
        }
        self.phone_numbers.remove(index);
        true
    }

    /// Drops every phone entry.
    pub(crate) fn clear_phones(&mut self) {
        self.phone_numbers.clear();
    }

    /// Runs every schema rule against every leaf.
    pub fn validate(&self, countries: &CountryTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        for (key, field) in self.fields() {
            for rule in rules_for(key.kind()) {
                if let Some(error) = rule.check(field.value(), countries) {
                    report.push(key, error);
                }
            }
        }
        report
    }

    /// Returns `true` iff every leaf passes its rules.
    pub fn is_valid(&self, countries: &CountryTable) -> bool {
        self.validate(countries).is_valid()
    }

    /// Errors the user should currently see: those on touched fields, or on
    /// every field once a submit has been attempted.
    pub fn visible_errors(&self, countries: &CountryTable) -> ValidationReport {
        let mut report = self.validate(countries);
        if !self.submitted {
            report.retain_fields(|key| self.field(key).is_some_and(FieldState::is_touched));
        }
        report
    }

    /// Marks every leaf as touched so validation messages surface.
    pub fn mark_all_touched(&mut self) {
        self.name.touched = true;
        self.email.touched = true;
        self.address.city.touched = true;
        self.address.country.touched = true;
        for phone in &mut self.phone_numbers {
            phone.touched = true;
        }
    }

    /// Records that a submit was attempted.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Whether a submit has been attempted since the last reset.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Copies name, email, city and country from `record`.
    ///
    /// Phone entries are left alone and the patched fields stay pristine.
    pub fn patch_scalars(&mut self, record: &UserRecord) {
        self.name.value.clone_from(&record.name);
        self.email.value.clone_from(&record.email);
        self.address.city.value.clone_from(&record.address.city);
        self.address.country.value.clone_from(&record.address.country);
    }

    /// The current form value as a record.
    pub fn value(&self) -> UserRecord {
        UserRecord {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            address: Address::new(
                self.address.city.value.clone(),
                self.address.country.value.clone(),
            ),
            phone_numbers: self
                .phone_numbers
                .iter()
                .map(|p| p.value.clone())
                .collect(),
        }
    }

    /// The current form value as JSON.
    pub fn value_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.value())?)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
