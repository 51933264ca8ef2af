//! Search documents and the indexing contract.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{IndexError, Result};

/// Kind of entity a search document describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    /// A database table.
    Table,
}

impl EntityType {
    /// Returns the `entityType` literal stored in documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
        }
    }

    /// Returns the name of the search index documents of this kind go to.
    #[must_use]
    pub const fn index_name(self) -> &'static str {
        match self {
            Self::Table => "table_search_index",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a search document for one catalog entity.
pub trait SearchIndex {
    /// The kind of entity this index builds documents for.
    fn entity_type(&self) -> EntityType;

    /// Projects the entity into a search document.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity lacks data the document requires.
    fn build_document(&self) -> Result<SearchDocument>;
}

/// A field-name to value map ready for the search engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchDocument(Map<String, Value>);

impl SearchDocument {
    /// Serializes `entity` into a document seed.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Serialization`] if the entity does not serialize
    /// to a JSON object.
    pub fn from_entity<T: Serialize>(entity: &T) -> Result<Self> {
        match serde_json::to_value(entity)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(IndexError::Serialization {
                message: format!("expected entity to serialize to an object, got {other}"),
            }),
        }
    }

    /// Removes the given fields. Absent fields are ignored.
    pub fn remove_fields(&mut self, fields: &[&str]) {
        for field in fields {
            self.0.remove(*field);
        }
    }

    /// Sets `field`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Serialization`] if `value` cannot be serialized.
    pub fn insert<V: Serialize>(&mut self, field: &str, value: V) -> Result<()> {
        self.0.insert(field.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Returns the value of `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns true if `field` is present.
    #[must_use]
    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the document has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Encodes the document as a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Serialization`] on encoding failure.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}
