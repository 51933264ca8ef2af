//! Error types for tessel-search operations.

use std::fmt;

use thiserror::Error;

/// Result type alias for projection operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// A relation a table must carry to be indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The owning database service.
    Service,
    /// The owning database.
    Database,
    /// The owning database schema.
    DatabaseSchema,
}

impl Relation {
    /// Returns the relation's field name in the entity's JSON form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Database => "database",
            Self::DatabaseSchema => "databaseSchema",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building a search document.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A required related entity is absent.
    #[error("{entity} is missing required relation '{relation}'")]
    MissingRelation {
        /// Fully qualified name of the entity being indexed.
        entity: String,
        /// The relation that was absent.
        relation: Relation,
    },

    /// The entity could not be serialized into a field map.
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure.
        message: String,
    },

    /// A column name could not be turned into a qualified name.
    #[error("invalid name: {message}")]
    InvalidName {
        /// Description of the naming problem.
        message: String,
    },
}

impl IndexError {
    /// Returns a short label for metrics.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingRelation { .. } => "missing_relation",
            Self::Serialization { .. } => "serialization",
            Self::InvalidName { .. } => "invalid_name",
        }
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
