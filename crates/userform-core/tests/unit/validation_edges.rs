//! Validation edge cases for individual fields.

use userform_core::form::{is_valid_email, is_valid_phone};
use userform_core::{CountryEntry, CountryTable, FieldError, FieldKey, FormState};

fn valid_form() -> FormState {
    let mut form = FormState::new();
    form.set_value(FieldKey::Name, "A").unwrap();
    form.set_value(FieldKey::Email, "a@b.com").unwrap();
    form.set_value(FieldKey::City, "X").unwrap();
    form.set_value(FieldKey::Country, "US").unwrap();
    form.set_value(FieldKey::Phone(0), "1234567890").unwrap();
    form
}

#[test]
fn test_email_shapes() {
    for ok in ["a@b.com", "first.last@sub.example.org", "x+tag@b.io", "a@localhost"] {
        assert!(is_valid_email(ok), "{ok} should be accepted");
    }
    for bad in ["", "a", "a@", "@b.com", "a@@b.com", "a@b..com", "a@-b.com", ".a@b.com"] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn test_phone_shapes() {
    assert!(is_valid_phone("0000000000"));
    assert!(!is_valid_phone("12345 67890"));
    assert!(!is_valid_phone("1234567890\n"));
    assert!(!is_valid_phone(""));
}

#[test]
fn test_country_validity_depends_on_table() {
    let form = valid_form();
    let only_canada =
        CountryTable::new(vec![CountryEntry::new("CA", "Canada")]).unwrap();
    let report = form.validate(&only_canada);
    assert_eq!(
        report.errors_for(FieldKey::Country),
        vec![&FieldError::UnknownCountry {
            code: "US".to_string()
        }]
    );
    assert!(form.is_valid(&CountryTable::builtin()));
}

#[test]
fn test_each_phone_slot_validated() {
    let mut form = valid_form();
    form.add_phone_slot();
    form.set_value(FieldKey::Phone(1), "12ab").unwrap();
    form.add_phone_slot();
    let report = form.validate(&CountryTable::builtin());
    assert_eq!(report.len(), 2);
    assert_eq!(report.errors_for(FieldKey::Phone(1))[0].code(), "pattern");
    assert_eq!(report.errors_for(FieldKey::Phone(2))[0].code(), "required");
}
