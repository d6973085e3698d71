//! Core data types for contact records.

mod country;
mod record;

pub use country::{CountryEntry, CountryTable};
pub use record::{Address, UserRecord};
