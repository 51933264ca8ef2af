//! Error types and result aliases for tessel.
//!
//! Errors here cover concerns shared by all crates: configuration loading,
//! input validation, and serialization. Domain crates wrap these in their
//! own error enums.

/// The result type used throughout tessel.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shared tessel operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration was missing a required value or carried an invalid one.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// A serialization or deserialization error occurred.
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure.
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error with the given message.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
