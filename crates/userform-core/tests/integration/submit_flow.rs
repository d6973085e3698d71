//! Submit flows from a blank form.

use userform_core::{FieldError, FieldKey, FormMode, FormState, SubmitOutcome};

use crate::common::{fill_form, numbered_record, sample_record, session, submit};

#[test]
fn test_submit_into_empty_store() {
    let mut session = session();
    submit(&mut session, &sample_record());

    assert_eq!(session.store().as_slice(), &[sample_record()]);
    assert_eq!(session.mode(), FormMode::New);
    assert_eq!(session.form(), &FormState::new());
}

#[test]
fn test_each_valid_submit_adds_one_entry() {
    let mut session = session();
    for n in 0..5 {
        submit(&mut session, &numbered_record(n));
        assert_eq!(session.store().len(), n + 1);
    }
    let names: Vec<&str> = session.store().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["User 0", "User 1", "User 2", "User 3", "User 4"]);
}

#[test]
fn test_missing_at_sign_blocks_submit() {
    let mut session = session();
    let mut record = sample_record();
    record.email = "ab.com".to_string();
    fill_form(&mut session, &record);

    let SubmitOutcome::Rejected(report) = session.submit().unwrap() else {
        unreachable!("Expected Rejected");
    };
    assert_eq!(report.errors_for(FieldKey::Email), vec![&FieldError::Email]);
    assert!(session.store().is_empty());
}

#[test]
fn test_empty_email_reports_required_only() {
    let mut session = session();
    let mut record = sample_record();
    record.email.clear();
    fill_form(&mut session, &record);

    let SubmitOutcome::Rejected(report) = session.submit().unwrap() else {
        unreachable!("Expected Rejected");
    };
    assert_eq!(report.errors_for(FieldKey::Email), vec![&FieldError::Required]);
}

#[test]
fn test_short_phone_blocks_submit() {
    let mut session = session();
    let mut record = sample_record();
    record.phone_numbers = vec!["123456789".to_string()];
    fill_form(&mut session, &record);

    assert!(session.submit().unwrap().is_rejected());
    assert!(session.store().is_empty());
    // The failed attempt surfaces every error.
    assert!(!session.form().visible_errors(session.countries()).is_valid());
}

#[test]
fn test_multiple_phones_stored_in_order() {
    let mut session = session();
    let record = sample_record()
        .with_phone("2222222222")
        .with_phone("3333333333");
    submit(&mut session, &record);
    assert_eq!(
        session.store().get(0).unwrap().phone_numbers,
        vec!["1234567890", "2222222222", "3333333333"]
    );
}

#[test]
fn test_fixing_rejected_form_then_submitting() {
    let mut session = session();
    let mut record = sample_record();
    record.address.country = "ZZ".to_string();
    fill_form(&mut session, &record);
    assert!(session.submit().unwrap().is_rejected());

    session.set_field(FieldKey::Country, "US").unwrap();
    assert_eq!(
        session.submit().unwrap(),
        SubmitOutcome::Appended { index: 0 }
    );
    assert!(!session.form().is_submitted());
}
