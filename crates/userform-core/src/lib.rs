#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Userform Core Library
//!
//! Form model, validation schema and in-memory submission store for contact
//! records.

pub mod confirm;
pub mod error;
pub mod form;
pub mod session;
pub mod store;
pub mod types;

mod proptests;

// Re-exports for convenience
pub use confirm::{AssumeYes, Confirm};
pub use error::{Error, Result};
pub use form::{FieldError, FieldKey, FormState, ValidationReport};
pub use session::{DeleteOutcome, FormPolicy, FormSession, SubmitOutcome};
pub use store::{FormMode, SubmissionStore};
pub use types::{Address, CountryEntry, CountryTable, UserRecord};
