//! Contact record types.

use serde::{Deserialize, Serialize};

/// Postal address nested inside a [`UserRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// City name
    pub city: String,
    /// ISO country code
    pub country: String,
}

impl Address {
    /// Creates a new address.
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }
}

/// A contact record as captured by the form and kept in the store.
///
/// Serializes with camelCase keys so the JSON shape matches the form value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Postal address
    pub address: Address,
    /// Phone numbers, in entry order
    pub phone_numbers: Vec<String>,
}

impl UserRecord {
    /// Creates a new record.
    ///
    /// # Examples
    ///
    /// ```
    /// use userform_core::{Address, UserRecord};
    ///
    /// let record = UserRecord::new("Ada", "ada@example.com", Address::new("London", "GB"))
    ///     .with_phone("0123456789");
    /// assert_eq!(record.phone_numbers, vec!["0123456789".to_string()]);
    /// ```
    pub fn new(name: impl Into<String>, email: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address,
            phone_numbers: Vec::new(),
        }
    }

    /// Appends a phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone_numbers.push(phone.into());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_camel_case() {
        let record = UserRecord::new("A", "a@b.com", Address::new("X", "US")).with_phone("1234567890");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["phoneNumbers"][0], "1234567890");
        assert_eq!(json["address"]["country"], "US");
        assert!(json.get("phone_numbers").is_none());
    }

    #[test]
    fn test_record_deserializes_form_json() {
        let json = r#"{
            "name": "A",
            "email": "a@b.com",
            "address": {"city": "X", "country": "US"},
            "phoneNumbers": ["1234567890", "0987654321"]
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.phone_numbers.len(), 2);
        assert_eq!(record.address, Address::new("X", "US"));
    }

    #[test]
    fn test_default_record_is_blank() {
        let record = UserRecord::default();
        assert!(record.name.is_empty());
        assert!(record.phone_numbers.is_empty());
    }
}
