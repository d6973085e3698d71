//! Country reference data.
//!
//! The table is materialized once at startup (from the built-in list or a
//! JSON/TOML file) and never mutated afterwards. Lookups are linear over the
//! entries, in load order.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single `{code, name}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// ISO country code, e.g. "US"
    pub code: String,
    /// Display name, e.g. "United States"
    pub name: String,
}

impl CountryEntry {
    /// Creates a new entry.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

const BUILTIN: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("MX", "Mexico"),
    ("BR", "Brazil"),
    ("GB", "United Kingdom"),
    ("IE", "Ireland"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("ES", "Spain"),
    ("IT", "Italy"),
    ("NL", "Netherlands"),
    ("SE", "Sweden"),
    ("IN", "India"),
    ("CN", "China"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("SG", "Singapore"),
    ("AU", "Australia"),
    ("NZ", "New Zealand"),
    ("ZA", "South Africa"),
];

/// TOML layout: a list of `[[country]]` tables.
#[derive(Debug, Deserialize)]
struct TomlCountries {
    #[serde(default)]
    country: Vec<CountryEntry>,
}

/// Immutable, ordered country reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTable {
    entries: Vec<CountryEntry>,
}

impl CountryTable {
    /// Builds a table from entries, rejecting blank or duplicate codes.
    pub fn new(entries: Vec<CountryEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.code.trim().is_empty() {
                return Err(Error::country_data(format!(
                    "entry '{}' has an empty code",
                    entry.name
                )));
            }
            if !seen.insert(entry.code.as_str()) {
                return Err(Error::country_data(format!(
                    "duplicate code {}",
                    entry.code
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The table compiled into the library.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(code, name)| CountryEntry::new(*code, *name))
                .collect(),
        }
    }

    /// Parses a JSON array of `{"code", "name"}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CountryEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Parses a TOML document made of `[[country]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: TomlCountries = toml::from_str(content)?;
        Self::new(parsed.country)
    }

    /// Loads a table from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            _ => {
                return Err(Error::country_data(format!(
                    "unsupported country file format: {}",
                    path.display()
                )));
            }
        };
        tracing::debug!(path = %path.display(), entries = table.len(), "Loaded country table");
        Ok(table)
    }

    /// Returns the display name for `code`, or `""` when the code is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use userform_core::CountryTable;
    ///
    /// let countries = CountryTable::builtin();
    /// assert_eq!(countries.lookup_name("US"), "United States");
    /// assert_eq!(countries.lookup_name("ZZ"), "");
    /// ```
    pub fn lookup_name(&self, code: &str) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.name.as_str())
            .unwrap_or("")
    }

    /// Returns `true` if `code` is in the table.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    /// Entries in load order.
    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::builtin()
    }
}
