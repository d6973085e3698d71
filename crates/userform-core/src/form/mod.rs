//! Form model: schema, live state and validation results.

mod report;
mod schema;
mod state;

pub use report::ValidationReport;
pub use schema::{
    FIELD_SCHEMA, FieldError, FieldKey, FieldKind, FieldSchema, PHONE_PATTERN, Rule,
    is_valid_email, is_valid_phone, rules_for,
};
pub use state::{AddressGroup, FieldState, FormState};
