//! Error types for userform-cli

use thiserror::Error;

/// Result type alias for userform-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in userform-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from userform-core
    #[error("Core error: {0}")]
    Core(#[from] userform_core::Error),

    /// Terminal or file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded or written
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A session command line could not be parsed
    #[error("Invalid command: {message}")]
    InvalidCommand {
        /// What is wrong with the command
        message: String,
    },

    /// One-shot validation found errors
    #[error("Form is invalid: {count} error(s)")]
    InvalidForm {
        /// Number of failed rules
        count: usize,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new command parse error.
    pub fn invalid_command<S: Into<String>>(message: S) -> Self {
        Error::InvalidCommand {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_command_display() {
        let err = Error::invalid_command("unknown command 'frobnicate'");
        assert_eq!(
            err.to_string(),
            "Invalid command: unknown command 'frobnicate'"
        );
    }

    #[test]
    fn test_core_error_wraps() {
        let err: Error = userform_core::Error::out_of_range("entry", 1, 0).into();
        assert_eq!(
            err.to_string(),
            "Core error: entry index 1 out of range (len 0)"
        );
    }

    #[test]
    fn test_invalid_form_display() {
        let err = Error::InvalidForm { count: 3 };
        assert_eq!(err.to_string(), "Form is invalid: 3 error(s)");
    }
}
