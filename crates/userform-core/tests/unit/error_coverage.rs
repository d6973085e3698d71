//! Error construction and classification through the public API.

use userform_core::{CountryTable, Error, FieldKey, FormState};

#[test]
fn test_out_of_range_from_phone_edit() {
    let mut form = FormState::new();
    let err = form.set_value(FieldKey::Phone(5), "1234567890").unwrap_err();
    assert_eq!(err.to_string(), "phone slot index 5 out of range (len 1)");
    assert!(err.is_user_error());
}

#[test]
fn test_country_data_errors_are_not_user_errors() {
    let err = CountryTable::from_json_str(r#"[{"code": "", "name": "Blank"}]"#).unwrap_err();
    assert!(matches!(err, Error::CountryData { .. }));
    assert!(!err.is_user_error());
}

#[test]
fn test_malformed_country_json() {
    let err = CountryTable::from_json_str("[{]").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_malformed_country_toml() {
    let err = CountryTable::from_toml_str("[[country]\ncode = 1").unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn test_error_debug_formatting() {
    let err = Error::out_of_range("entry", 7, 2);
    let debug_str = format!("{err:?}");
    assert!(debug_str.contains("OutOfRange"));
    assert!(debug_str.contains('7'));
}
