//! # tessel-search
//!
//! Projection of catalog entities into search-engine documents.
//!
//! A [`Table`] read from the catalog is turned into a flat [`SearchDocument`]:
//!
//! - **Column Flattening**: nested columns become a pre-order list with dotted names
//! - **Tag Aggregation**: table and column tags are merged and the tier tag pulled out
//! - **Suggestions**: weighted autocomplete entries for names along the hierarchy
//! - **Field Stripping**: large or derived fields are dropped before indexing
//!
//! ## Example
//!
//! ```rust,ignore
//! use tessel_search::{SearchIndex, TableIndex};
//!
//! let table: tessel_search::Table = serde_json::from_str(json)?;
//! let document = TableIndex::new(&table).build_document()?;
//! client.index(TableIndex::INDEX_NAME, document.into_inner()).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod error;
pub mod flatten;
pub mod metrics;
pub mod model;
pub mod suggest;
pub mod table_index;
pub mod tags;

// Re-export main types at crate root
pub use document::{EntityType, SearchDocument, SearchIndex};
pub use error::{IndexError, Relation, Result};
pub use flatten::{FlattenColumn, flatten_columns};
pub use model::{Column, EntityReference, LabelType, Table, TagLabel, TagSource, TagState};
pub use suggest::Suggestion;
pub use table_index::{EXCLUDED_FIELDS, TableIndex};
pub use tags::ParsedTags;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::document::{SearchDocument, SearchIndex};
    pub use crate::error::{IndexError, Result};
    pub use crate::model::{Column, EntityReference, Table, TagLabel};
    pub use crate::table_index::TableIndex;
}
