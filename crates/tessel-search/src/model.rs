//! Catalog entity model consumed by the projector.
//!
//! These types mirror the JSON shape the catalog's storage layer hands out.
//! Fields the projector does not interpret are carried opaquely in `extra`
//! so they reach the search document unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use tessel_core::fqn;

/// Classification segment that marks a tag as a tier tag.
pub const TIER_CLASSIFICATION: &str = "Tier";

/// Where a tag label comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TagSource {
    /// A tag from a classification (e.g. `PII.Sensitive`, `Tier.Tier1`).
    #[default]
    Classification,
    /// A glossary term.
    Glossary,
}

/// How a tag label was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LabelType {
    /// Applied by a user.
    #[default]
    Manual,
    /// Propagated from lineage.
    Propagated,
    /// Applied by an automated process.
    Automated,
    /// Derived from a glossary term's related tags.
    Derived,
}

/// Review state of a tag label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TagState {
    /// Suggested but not yet accepted.
    Suggested,
    /// Accepted.
    #[default]
    Confirmed,
}

/// A tag applied to a table or column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagLabel {
    /// Fully qualified tag name, `{classification}.{tag}`.
    #[serde(rename = "tagFQN")]
    pub tag_fqn: String,
    /// Tag description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classification or glossary.
    #[serde(default)]
    pub source: TagSource,
    /// How the label was applied.
    #[serde(default)]
    pub label_type: LabelType,
    /// Review state.
    #[serde(default)]
    pub state: TagState,
    /// API link to the tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl TagLabel {
    /// Creates a confirmed, manually applied classification tag.
    #[must_use]
    pub fn new(tag_fqn: impl Into<String>) -> Self {
        Self {
            tag_fqn: tag_fqn.into(),
            description: None,
            source: TagSource::default(),
            label_type: LabelType::default(),
            state: TagState::default(),
            href: None,
        }
    }

    /// Returns the classification segment of the tag FQN.
    #[must_use]
    pub fn classification(&self) -> Option<String> {
        fqn::split(&self.tag_fqn).into_iter().next()
    }

    /// Returns true if this label belongs to the tier classification.
    #[must_use]
    pub fn is_tier(&self) -> bool {
        self.source == TagSource::Classification
            && self
                .classification()
                .is_some_and(|c| c.eq_ignore_ascii_case(TIER_CLASSIFICATION))
    }
}

/// A reference to a related entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityReference {
    /// Entity id.
    pub id: Uuid,
    /// Entity type (`databaseService`, `database`, `user`, ...).
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Entity name.
    pub name: String,
    /// Entity FQN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the entity is soft-deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

impl EntityReference {
    /// Creates a reference with a fresh id.
    #[must_use]
    pub fn new(entity_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: entity_type.into(),
            name: name.into(),
            fully_qualified_name: None,
            display_name: None,
            deleted: None,
        }
    }
}

/// A table column, possibly with nested children (struct, map, array types).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name, scoped to its parent.
    pub name: String,
    /// Column description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags applied to this column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagLabel>>,
    /// Nested columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Column>>,
    /// Attributes carried through unchanged (data type, constraints, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Column {
    /// Creates a column with no tags or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            tags: None,
            children: None,
            extra: Map::new(),
        }
    }

    /// Returns the column with the given tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<TagLabel>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Returns the column with the given children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Column>) -> Self {
        self.children = Some(children);
        self
    }

    /// Returns the column with the given description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A catalog table.
///
/// The projector treats tables as read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table id.
    pub id: Uuid,
    /// Table name.
    pub name: String,
    /// Human-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// `{service}.{database}.{schema}.{table}`.
    pub fully_qualified_name: String,
    /// Table description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Top-level columns.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub columns: Vec<Column>,
    /// Table-level tags.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<TagLabel>,
    /// Owning service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<EntityReference>,
    /// Owning database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<EntityReference>,
    /// Owning schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_schema: Option<EntityReference>,
    /// Service type (`Mysql`, `BigQuery`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    /// Users following the table.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub followers: Vec<EntityReference>,
    /// Sample rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<Value>,
    /// Profiler statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_profile: Option<Value>,
    /// Join statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joins: Option<Value>,
    /// Change history for the latest version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_description: Option<Value>,
    /// Attributes carried through unchanged (owner, version, table type, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Catalog exports write absent lists as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_detection_uses_classification_segment() {
        assert!(TagLabel::new("Tier.Tier1").is_tier());
        assert!(TagLabel::new("tier.Tier3").is_tier());
        assert!(!TagLabel::new("PII.Sensitive").is_tier());
        assert!(!TagLabel::new("Frontier.Tier1").is_tier());

        let mut glossary = TagLabel::new("Tier.Tier1");
        glossary.source = TagSource::Glossary;
        assert!(!glossary.is_tier());
    }

    #[test]
    fn tag_label_uses_catalog_field_names() {
        let json = serde_json::to_value(TagLabel::new("PII.Sensitive")).unwrap();
        assert_eq!(json["tagFQN"], "PII.Sensitive");
        assert_eq!(json["labelType"], "Manual");
        assert_eq!(json["source"], "Classification");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn unknown_table_fields_are_preserved() {
        let json = serde_json::json!({
            "id": "5f2c0a7e-3a64-4c6e-9b55-2a3f3f0c9d11",
            "name": "orders",
            "fullyQualifiedName": "mysql.shop.public.orders",
            "tableType": "Regular",
            "version": 0.3,
            "columns": [{"name": "id", "dataType": "INT", "ordinalPosition": 1}]
        });
        let table: Table = serde_json::from_value(json).unwrap();

        assert_eq!(table.extra["tableType"], "Regular");
        assert_eq!(table.columns[0].extra["dataType"], "INT");
        assert!(table.service.is_none());

        let back = serde_json::to_value(&table).unwrap();
        assert_eq!(back["tableType"], "Regular");
        assert_eq!(back["columns"][0]["ordinalPosition"], 1);
    }

    #[test]
    fn null_lists_read_as_empty() {
        let table: Table = serde_json::from_value(serde_json::json!({
            "id": "5f2c0a7e-3a64-4c6e-9b55-2a3f3f0c9d11",
            "name": "orders",
            "fullyQualifiedName": "mysql.shop.public.orders",
            "columns": null,
            "tags": null,
            "followers": null
        }))
        .unwrap();

        assert!(table.columns.is_empty());
        assert!(table.tags.is_empty());
        assert!(table.followers.is_empty());
    }
}
