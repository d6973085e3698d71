//! Edit and delete flows over a populated store.

use userform_core::{
    AssumeYes, DeleteOutcome, FieldKey, FormMode, FormPolicy, FormState, SubmitOutcome,
};

use crate::common::{numbered_record, sample_record, session, session_with_policy, submit};

#[test]
fn test_begin_edit_then_delete_same_entry() {
    let mut session = session();
    submit(&mut session, &sample_record());

    session.begin_edit(0).unwrap();
    let outcome = session.delete_entry(0, &mut AssumeYes).unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted(sample_record()));
    assert!(session.store().is_empty());
    assert_eq!(session.mode(), FormMode::New);
    assert_eq!(session.form(), &FormState::new());
}

#[test]
fn test_delete_below_cursor_shifts_it() {
    let mut session = session();
    let r0 = numbered_record(0);
    let r1 = numbered_record(1);
    submit(&mut session, &r0);
    submit(&mut session, &r1);

    session.begin_edit(1).unwrap();
    session.delete_entry(0, &mut AssumeYes).unwrap();

    assert_eq!(session.store().as_slice(), &[r1]);
    assert_eq!(session.mode(), FormMode::Editing(0));

    // Submitting the edit now lands on the shifted entry.
    session.remove_phone_slot(0);
    session.set_field(FieldKey::City, "Moved").unwrap();
    let outcome = session.submit().unwrap();
    assert!(matches!(outcome, SubmitOutcome::Updated { index: 0, .. }));
    assert_eq!(session.store().get(0).unwrap().address.city, "Moved");
}

#[test]
fn test_declined_delete_is_full_abort() {
    let mut session = session();
    submit(&mut session, &numbered_record(0));
    submit(&mut session, &numbered_record(1));
    session.begin_edit(1).unwrap();

    let outcome = session.delete_entry(0, &mut |_: &str| false).unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(session.store().len(), 2);
    assert_eq!(session.mode(), FormMode::Editing(1));
}

#[test]
fn test_edit_load_adds_default_slot_before_stored_phones() {
    let mut session = session();
    let record = sample_record().with_phone("5555555555");
    submit(&mut session, &record);

    session.begin_edit(0).unwrap();
    let form = session.form();
    assert_eq!(form.phone_count(), record.phone_numbers.len() + 1);
    assert_eq!(form.field(FieldKey::Phone(0)).unwrap().value(), "");
    assert_eq!(form.value().phone_numbers[1..], record.phone_numbers[..]);
    assert_eq!(form.field(FieldKey::Name).unwrap().value(), "A");
}

#[test]
fn test_unchanged_edit_round_trip_needs_default_slot_removed() {
    let mut session = session();
    submit(&mut session, &numbered_record(0));
    submit(&mut session, &numbered_record(1));
    let original = session.store().clone();

    // Straight resubmit trips over the blank default slot.
    session.begin_edit(1).unwrap();
    let SubmitOutcome::Rejected(report) = session.submit().unwrap() else {
        unreachable!("Expected Rejected");
    };
    assert!(report.has_errors(FieldKey::Phone(0)));
    assert_eq!(session.mode(), FormMode::Editing(1));

    // Dropping that slot restores the exact original record.
    session.remove_phone_slot(0);
    assert!(session.submit().unwrap().is_accepted());
    assert_eq!(session.store(), &original);
}

#[test]
fn test_unchanged_edit_round_trip_with_replace_policy() {
    let mut session = session_with_policy(FormPolicy {
        replace_default_phone_slot: true,
        ..FormPolicy::default()
    });
    for n in 0..3 {
        submit(&mut session, &numbered_record(n));
    }
    let original = session.store().clone();

    session.begin_edit(2).unwrap();
    let outcome = session.submit().unwrap();
    assert!(matches!(outcome, SubmitOutcome::Updated { index: 2, .. }));
    assert_eq!(session.store(), &original);
}

#[test]
fn test_switching_edit_target() {
    let mut session = session();
    submit(&mut session, &numbered_record(0));
    submit(&mut session, &numbered_record(1));

    session.begin_edit(0).unwrap();
    session.set_field(FieldKey::Name, "abandoned").unwrap();
    session.begin_edit(1).unwrap();

    assert_eq!(session.mode(), FormMode::Editing(1));
    assert_eq!(
        session.form().field(FieldKey::Name).unwrap().value(),
        "User 1"
    );
}

#[test]
fn test_country_names_for_listing() {
    let mut session = session();
    submit(&mut session, &sample_record());
    submit(&mut session, &numbered_record(1));

    let labels: Vec<&str> = session
        .records_with_country_names()
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    assert_eq!(labels, vec!["United States", "United Kingdom"]);
}
