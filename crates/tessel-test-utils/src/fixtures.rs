//! Pre-built test fixtures for common test scenarios.
//!
//! Provides factory functions to create catalog entities with sensible defaults.

use serde_json::json;
use uuid::Uuid;

use tessel_search::{Column, EntityReference, Table, TagLabel};

/// Factory for creating test tables.
pub struct TableFactory;

impl TableFactory {
    /// A table with service, database and schema set and no columns.
    pub fn bare(name: &str) -> Table {
        let service = EntityReference::new("databaseService", "mysql_prod");
        let database = EntityReference::new("database", "shop");
        let schema = EntityReference::new("databaseSchema", "public");
        let fully_qualified_name = format!(
            "{}.{}.{}.{name}",
            service.name, database.name, schema.name
        );

        Table {
            id: Uuid::new_v4(),
            name: name.to_string(),
            display_name: None,
            fully_qualified_name,
            description: None,
            columns: Vec::new(),
            tags: Vec::new(),
            service: Some(service),
            database: Some(database),
            database_schema: Some(schema),
            service_type: Some("Mysql".to_string()),
            followers: Vec::new(),
            sample_data: None,
            table_profile: None,
            joins: None,
            change_description: None,
            extra: serde_json::Map::new(),
        }
    }

    /// An `orders` table with nested columns, tags, followers and every
    /// non-indexable field populated.
    pub fn orders() -> Table {
        let mut table = Self::bare("orders");
        table.display_name = Some("Customer Orders".to_string());
        table.description = Some("All orders placed through the storefront".to_string());
        table.columns = ColumnFactory::orders();
        table.tags = vec![TagLabel::new("Finance.Revenue"), TagLabel::new("Tier.Tier1")];
        table.followers = vec![
            EntityReference::new("user", "alice"),
            EntityReference::new("user", "bob"),
        ];
        table.sample_data = Some(json!({"columns": ["id"], "rows": [[1], [2]]}));
        table.table_profile = Some(json!({"rowCount": 2, "columnCount": 4}));
        table.joins = Some(json!({"startDate": "2024-01-01", "columnJoins": []}));
        table.change_description = Some(json!({"fieldsAdded": [], "previousVersion": 0.1}));
        table
            .extra
            .insert("tableType".to_string(), json!("Regular"));
        table
    }
}

/// Factory for column trees.
pub struct ColumnFactory;

impl ColumnFactory {
    /// Columns for the `orders` fixture:
    ///
    /// ```text
    /// id            [PII.None]
    /// customer
    ///   name        [PII.Sensitive]
    ///   address
    ///     city
    ///     zip
    /// total         [Finance.Revenue]
    /// ```
    pub fn orders() -> Vec<Column> {
        vec![
            Column::new("id")
                .with_description("Order id")
                .with_tags(vec![TagLabel::new("PII.None")]),
            Column::new("customer").with_children(vec![
                Column::new("name").with_tags(vec![TagLabel::new("PII.Sensitive")]),
                Column::new("address").with_children(vec![Column::new("city"), Column::new("zip")]),
            ]),
            Column::new("total").with_tags(vec![TagLabel::new("Finance.Revenue")]),
        ]
    }

    /// A single chain of `depth` nested columns named `c0`, `c1`, ...
    pub fn chain(depth: usize) -> Vec<Column> {
        (0..depth).rev().fold(Vec::new(), |children, level| {
            let column = Column::new(format!("c{level}"));
            let column = if children.is_empty() {
                column
            } else {
                column.with_children(children)
            };
            vec![column]
        })
    }
}
