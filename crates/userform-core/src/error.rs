//! Error types for userform-core.

/// Errors that can occur while operating a form session.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Index-based operation on a position that does not exist
    #[error("{target} index {index} out of range (len {len})")]
    OutOfRange {
        /// What was being indexed ("entry", "phone slot")
        target: &'static str,
        /// Requested index
        index: usize,
        /// Length of the indexed collection at the time of the call
        len: usize,
    },

    /// Country reference data could not be used
    #[error("Country data error: {message}")]
    CountryData {
        /// What is wrong with the data
        message: String,
    },

    /// I/O error (reading country data files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience `Result` type alias for userform operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error was caused by user input.
    ///
    /// User errors are recovered by correcting the input and trying again;
    /// everything else points at the environment (country data files).
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::OutOfRange { .. } => true,
            Error::CountryData { .. } => false,
            Error::Io(_) => false,
            Error::Serialization(_) => false,
            Error::Toml(_) => false,
        }
    }

    /// Creates a new out-of-range error.
    pub fn out_of_range(target: &'static str, index: usize, len: usize) -> Self {
        Error::OutOfRange { target, index, len }
    }

    /// Creates a new country data error.
    pub fn country_data<S: Into<String>>(message: S) -> Self {
        Error::CountryData {
            message: message.into(),
        }
    }
}
