//! Static field schema and validation rules.
//!
//! Every leaf of the form maps to a [`FieldKind`], and every kind has a fixed
//! list of [`Rule`]s in [`FIELD_SCHEMA`]. A single routine walks the form and
//! applies the rules; nothing is attached to fields at construction time.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::CountryTable;

/// Pattern every phone entry must match.
pub const PHONE_PATTERN: &str = "^[0-9]{10}$";

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Invalid email regex")
});

#[allow(clippy::expect_used)]
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("Invalid phone regex"));

/// The kind of a form leaf, independent of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `name`
    Name,
    /// `email`
    Email,
    /// `address.city`
    City,
    /// `address.country`
    Country,
    /// Any entry of `phoneNumbers`
    Phone,
}

/// Addresses one leaf of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// `name`
    Name,
    /// `email`
    Email,
    /// `address.city`
    City,
    /// `address.country`
    Country,
    /// `phoneNumbers[i]`
    Phone(usize),
}

impl FieldKey {
    /// The schema kind for this key.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldKey::Name => FieldKind::Name,
            FieldKey::Email => FieldKind::Email,
            FieldKey::City => FieldKind::City,
            FieldKey::Country => FieldKind::Country,
            FieldKey::Phone(_) => FieldKind::Phone,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Name => write!(f, "name"),
            FieldKey::Email => write!(f, "email"),
            FieldKey::City => write!(f, "address.city"),
            FieldKey::Country => write!(f, "address.country"),
            FieldKey::Phone(index) => write!(f, "phoneNumbers.{index}"),
        }
    }
}

/// A single failed rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    /// Value is empty
    Required,
    /// Value is not a well-formed email address
    Email,
    /// Value does not match the field's pattern
    Pattern {
        /// The pattern that was required
        pattern: &'static str,
    },
    /// Value is not a known country code
    UnknownCountry {
        /// The rejected code
        code: String,
    },
}

impl FieldError {
    /// Short machine-readable key ("required", "email", "pattern", "country").
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::Email => "email",
            FieldError::Pattern { .. } => "pattern",
            FieldError::UnknownCountry { .. } => "country",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "this field is required"),
            FieldError::Email => write!(f, "must be a valid email address"),
            FieldError::Pattern { pattern } => write!(f, "must match {pattern}"),
            FieldError::UnknownCountry { code } => write!(f, "unknown country code '{code}'"),
        }
    }
}

/// A validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty.
    Required,
    /// Value must be a well-formed email address.
    Email,
    /// Value must be exactly ten ASCII digits.
    PhoneDigits,
    /// Value must be a code present in the country table.
    KnownCountry,
}

impl Rule {
    /// Applies the rule to `value`.
    ///
    /// Only [`Rule::Required`] rejects an empty value; the other rules pass
    /// empty input so a blank field reports a single error.
    pub fn check(&self, value: &str, countries: &CountryTable) -> Option<FieldError> {
        match self {
            Rule::Required => value.is_empty().then_some(FieldError::Required),
            _ if value.is_empty() => None,
            Rule::Email => (!is_valid_email(value)).then_some(FieldError::Email),
            Rule::PhoneDigits => (!is_valid_phone(value)).then_some(FieldError::Pattern {
                pattern: PHONE_PATTERN,
            }),
            Rule::KnownCountry => (!countries.contains(value)).then(|| {
                FieldError::UnknownCountry {
                    code: value.to_string(),
                }
            }),
        }
    }
}

/// Rules attached to one field kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// Field kind the rules apply to
    pub kind: FieldKind,
    /// Rules, checked in order
    pub rules: &'static [Rule],
}

/// The form schema.
pub const FIELD_SCHEMA: &[FieldSchema] = &[
    FieldSchema {
        kind: FieldKind::Name,
        rules: &[Rule::Required],
    },
    FieldSchema {
        kind: FieldKind::Email,
        rules: &[Rule::Required, Rule::Email],
    },
    FieldSchema {
        kind: FieldKind::City,
        rules: &[Rule::Required],
    },
    FieldSchema {
        kind: FieldKind::Country,
        rules: &[Rule::Required, Rule::KnownCountry],
    },
    FieldSchema {
        kind: FieldKind::Phone,
        rules: &[Rule::Required, Rule::PhoneDigits],
    },
];

/// Returns the rules for a field kind.
pub fn rules_for(kind: FieldKind) -> &'static [Rule] {
    FIELD_SCHEMA
        .iter()
        .find(|schema| schema.kind == kind)
        .map(|schema| schema.rules)
        .unwrap_or(&[])
}

/// Returns `true` if `value` is a well-formed email address.
///
/// # Examples
///
/// ```
/// use userform_core::form::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(is_valid_email("user@localhost"));
/// assert!(!is_valid_email("ab.com"));
/// assert!(!is_valid_email(""));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.len() > EMAIL_MAX_LEN {
        return false;
    }
    match value.split_once('@') {
        Some((local, _)) if local.len() <= EMAIL_LOCAL_MAX_LEN => EMAIL_RE.is_match(value),
        _ => false,
    }
}

/// Returns `true` if `value` is exactly ten ASCII digits.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}
