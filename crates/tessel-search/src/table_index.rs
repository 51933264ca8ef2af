//! Search document projection for tables.
//!
//! # Document Shape
//!
//! The table is serialized into a field map, non-indexable fields are
//! stripped, and derived fields are added on top:
//!
//! ```text
//! tags, tier              aggregated from column tags, then table tags
//! followers               follower ids
//! suggest                 [fqn @5, name @10]
//! service_suggest         [service name @5]
//! database_suggest        [database name @5]
//! schema_suggest          [schema name @5]
//! column_suggest          [flattened column name @5, ...]
//! entityType, serviceType
//! ```
//!
//! Derived fields overwrite same-named fields from the seed.

use tessel_core::index_span;

use crate::document::{EntityType, SearchDocument, SearchIndex};
use crate::error::{IndexError, Relation, Result};
use crate::flatten::{FlattenColumn, flatten_columns};
use crate::metrics::{record_document_built, record_document_failure};
use crate::model::{EntityReference, Table, TagLabel};
use crate::suggest::{NAME_WEIGHT, Suggestion};
use crate::tags::ParsedTags;

/// Fields never sent to the search index.
pub const EXCLUDED_FIELDS: [&str; 4] =
    ["sampleData", "tableProfile", "joins", "changeDescription"];

/// Builds search documents for a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct TableIndex<'a> {
    table: &'a Table,
}

/// The three parents every indexed table must have.
struct Parents<'a> {
    service: &'a EntityReference,
    database: &'a EntityReference,
    schema: &'a EntityReference,
}

impl<'a> TableIndex<'a> {
    /// Name of the index table documents are written to.
    pub const INDEX_NAME: &'static str = EntityType::Table.index_name();

    /// Creates an index view over `table`.
    #[must_use]
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    fn parents(&self) -> Result<Parents<'a>> {
        Ok(Parents {
            service: self.require(self.table.service.as_ref(), Relation::Service)?,
            database: self.require(self.table.database.as_ref(), Relation::Database)?,
            schema: self.require(
                self.table.database_schema.as_ref(),
                Relation::DatabaseSchema,
            )?,
        })
    }

    fn require(
        &self,
        reference: Option<&'a EntityReference>,
        relation: Relation,
    ) -> Result<&'a EntityReference> {
        reference.ok_or_else(|| IndexError::MissingRelation {
            entity: self.table.fully_qualified_name.clone(),
            relation,
        })
    }

    fn build(&self) -> Result<(SearchDocument, usize)> {
        let parents = self.parents()?;

        let mut doc = SearchDocument::from_entity(self.table)?;
        doc.remove_fields(&EXCLUDED_FIELDS);

        let columns = flatten_columns(&self.table.columns, None)?;
        let column_suggest: Vec<Suggestion> = columns
            .iter()
            .map(|c| Suggestion::with_default_weight(c.name.clone()))
            .collect();

        let parsed = ParsedTags::parse(collect_tags(&columns, &self.table.tags));
        let followers: Vec<String> = self
            .table
            .followers
            .iter()
            .map(|f| f.id.to_string())
            .collect();

        let suggest = [
            Suggestion::with_default_weight(self.table.fully_qualified_name.clone()),
            Suggestion::new(self.table.name.clone(), NAME_WEIGHT),
        ];

        tracing::debug!(
            columns = columns.len(),
            tags = parsed.tags.len(),
            tier = parsed.tier.as_ref().map(|t| t.tag_fqn.as_str()),
            "built table search document"
        );

        doc.insert("tags", &parsed.tags)?;
        doc.insert("tier", &parsed.tier)?;
        doc.insert("followers", followers)?;
        doc.insert("suggest", suggest)?;
        doc.insert("service_suggest", parent_suggest(parents.service))?;
        doc.insert("column_suggest", column_suggest)?;
        doc.insert("schema_suggest", parent_suggest(parents.schema))?;
        doc.insert("database_suggest", parent_suggest(parents.database))?;
        doc.insert("entityType", EntityType::Table.as_str())?;
        doc.insert("serviceType", &self.table.service_type)?;

        Ok((doc, columns.len()))
    }
}

impl SearchIndex for TableIndex<'_> {
    fn entity_type(&self) -> EntityType {
        EntityType::Table
    }

    fn build_document(&self) -> Result<SearchDocument> {
        let entity_type = self.entity_type();
        let span = index_span(entity_type.as_str(), &self.table.fully_qualified_name);
        let _guard = span.enter();

        match self.build() {
            Ok((doc, columns)) => {
                record_document_built(entity_type.as_str(), columns);
                Ok(doc)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to build table search document");
                record_document_failure(entity_type.as_str(), err.reason());
                Err(err)
            }
        }
    }
}

fn parent_suggest(parent: &EntityReference) -> [Suggestion; 1] {
    [Suggestion::with_default_weight(parent.name.clone())]
}

/// Column tags come first, then table tags, so a table-level tier tag
/// takes precedence over column-level ones.
fn collect_tags(columns: &[FlattenColumn], table_tags: &[TagLabel]) -> Vec<TagLabel> {
    columns
        .iter()
        .flat_map(|c| c.tags.iter())
        .chain(table_tags)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Column;

    fn table() -> Table {
        serde_json::from_value(json!({
            "id": "5f2c0a7e-3a64-4c6e-9b55-2a3f3f0c9d11",
            "name": "orders",
            "fullyQualifiedName": "mysql.shop.public.orders",
            "serviceType": "Mysql",
            "service": {"id": "11111111-1111-4111-8111-111111111111", "type": "databaseService", "name": "mysql"},
            "database": {"id": "22222222-2222-4222-8222-222222222222", "type": "database", "name": "shop"},
            "databaseSchema": {"id": "33333333-3333-4333-8333-333333333333", "type": "databaseSchema", "name": "public"},
            "sampleData": {"rows": [[1]]},
            "joins": {"columnJoins": []},
        }))
        .unwrap()
    }

    #[test]
    fn collect_tags_puts_table_tags_last() {
        let columns = flatten_columns(
            &[Column::new("a").with_tags(vec![TagLabel::new("Tier.Tier3")])],
            None,
        )
        .unwrap();
        let tags = collect_tags(&columns, &[TagLabel::new("Tier.Tier1")]);
        let parsed = ParsedTags::parse(tags);
        assert_eq!(parsed.tier.unwrap().tag_fqn, "Tier.Tier1");
    }

    #[test]
    fn excluded_fields_are_stripped() {
        let table = table();
        let doc = TableIndex::new(&table).build_document().unwrap();
        for field in EXCLUDED_FIELDS {
            assert!(!doc.contains_key(field), "{field} should be stripped");
        }
        assert_eq!(doc.get("entityType"), Some(&json!("table")));
        assert_eq!(doc.get("tier"), Some(&json!(null)));
    }

    #[test]
    fn missing_schema_is_reported() {
        let mut table = table();
        table.database_schema = None;
        let err = TableIndex::new(&table).build_document().unwrap_err();
        assert!(matches!(
            err,
            IndexError::MissingRelation { relation: Relation::DatabaseSchema, .. }
        ));
        assert_eq!(
            err.to_string(),
            "mysql.shop.public.orders is missing required relation 'databaseSchema'"
        );
    }

    #[test]
    fn index_name() {
        assert_eq!(TableIndex::INDEX_NAME, "table_search_index");
    }
}
