//! Common test utilities for userform-core integration tests.

use std::sync::Arc;

use userform_core::{Address, CountryTable, FieldKey, FormPolicy, FormSession, UserRecord};

/// Creates a session over the built-in country table.
pub fn session() -> FormSession {
    FormSession::new(Arc::new(CountryTable::builtin()))
}

/// Creates a session with a custom policy.
pub fn session_with_policy(policy: FormPolicy) -> FormSession {
    session().with_policy(policy)
}

/// The record used by the basic submit scenario.
pub fn sample_record() -> UserRecord {
    UserRecord::new("A", "a@b.com", Address::new("X", "US")).with_phone("1234567890")
}

/// Types `record` into the session's form, adding phone slots as needed.
pub fn fill_form(session: &mut FormSession, record: &UserRecord) {
    session.set_field(FieldKey::Name, record.name.as_str()).unwrap();
    session.set_field(FieldKey::Email, record.email.as_str()).unwrap();
    session
        .set_field(FieldKey::City, record.address.city.as_str())
        .unwrap();
    session
        .set_field(FieldKey::Country, record.address.country.as_str())
        .unwrap();
    for (i, phone) in record.phone_numbers.iter().enumerate() {
        while session.form().phone_count() <= i {
            session.add_phone_slot();
        }
        session.set_field(FieldKey::Phone(i), phone.as_str()).unwrap();
    }
}

/// Fills and submits `record`, asserting it was accepted.
pub fn submit(session: &mut FormSession, record: &UserRecord) {
    fill_form(session, record);
    let outcome = session.submit().unwrap();
    assert!(outcome.is_accepted(), "expected {record:?} to be accepted");
}

/// A distinct valid record per `n`.
pub fn numbered_record(n: usize) -> UserRecord {
    UserRecord::new(
        format!("User {n}"),
        format!("user{n}@example.com"),
        Address::new(format!("City {n}"), "GB"),
    )
    .with_phone(format!("{:010}", n))
}
