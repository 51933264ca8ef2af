//! End-to-end tests for table search document projection.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::{Value, json};

use tessel_search::{
    Column, EXCLUDED_FIELDS, IndexError, Relation, SearchIndex, TableIndex, TagLabel,
};
use tessel_test_utils::{TableFactory, init_test_logging};

fn inputs(doc_field: &Value) -> Vec<(String, u64)> {
    doc_field
        .as_array()
        .expect("suggest field is an array")
        .iter()
        .map(|s| {
            (
                s["input"].as_str().unwrap().to_string(),
                s["weight"].as_u64().unwrap(),
            )
        })
        .collect()
}

fn tag_fqns(doc_field: &Value) -> Vec<String> {
    doc_field
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tagFQN"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn orders_document_has_all_derived_fields() {
    init_test_logging();
    let table = TableFactory::orders();
    let doc = TableIndex::new(&table).build_document().unwrap();

    assert_eq!(doc.get("entityType"), Some(&json!("table")));
    assert_eq!(doc.get("serviceType"), Some(&json!("Mysql")));
    assert_eq!(doc.get("name"), Some(&json!("orders")));
    assert_eq!(doc.get("displayName"), Some(&json!("Customer Orders")));
    assert_eq!(doc.get("tableType"), Some(&json!("Regular")));

    assert_eq!(
        inputs(doc.get("suggest").unwrap()),
        [
            ("mysql_prod.shop.public.orders".to_string(), 5),
            ("orders".to_string(), 10),
        ]
    );
    assert_eq!(inputs(doc.get("service_suggest").unwrap()), [("mysql_prod".to_string(), 5)]);
    assert_eq!(inputs(doc.get("database_suggest").unwrap()), [("shop".to_string(), 5)]);
    assert_eq!(inputs(doc.get("schema_suggest").unwrap()), [("public".to_string(), 5)]);

    let columns: Vec<(String, u64)> = [
        "id",
        "customer",
        "customer.name",
        "customer.address",
        "customer.address.city",
        "customer.address.zip",
        "total",
    ]
    .iter()
    .map(|n| ((*n).to_string(), 5))
    .collect();
    assert_eq!(inputs(doc.get("column_suggest").unwrap()), columns);
}

#[test]
fn excluded_fields_never_reach_the_document() {
    let table = TableFactory::orders();
    assert!(table.sample_data.is_some() && table.change_description.is_some());

    let doc = TableIndex::new(&table).build_document().unwrap();
    for field in EXCLUDED_FIELDS {
        assert!(!doc.contains_key(field), "{field} must be stripped");
    }
}

#[test]
fn tags_merge_columns_then_table() {
    let table = TableFactory::orders();
    let doc = TableIndex::new(&table).build_document().unwrap();

    assert_eq!(
        tag_fqns(doc.get("tags").unwrap()),
        ["PII.None", "PII.Sensitive", "Finance.Revenue"]
    );
    assert_eq!(doc.get("tier").unwrap()["tagFQN"], json!("Tier.Tier1"));
}

#[test]
fn table_without_tier_has_null_tier() {
    let mut table = TableFactory::orders();
    table.tags = vec![TagLabel::new("Finance.Revenue")];
    let doc = TableIndex::new(&table).build_document().unwrap();
    assert_eq!(doc.get("tier"), Some(&Value::Null));
}

#[test]
fn followers_are_projected_to_ids() {
    let table = TableFactory::orders();
    let doc = TableIndex::new(&table).build_document().unwrap();

    let expected: Vec<Value> = table
        .followers
        .iter()
        .map(|f| json!(f.id.to_string()))
        .collect();
    assert_eq!(doc.get("followers"), Some(&Value::Array(expected)));
}

#[test]
fn derived_fields_overwrite_seed_fields() {
    let mut table = TableFactory::orders();
    table
        .extra
        .insert("entityType".to_string(), json!("somethingElse"));
    table.extra.insert("suggest".to_string(), json!("stale"));

    let doc = TableIndex::new(&table).build_document().unwrap();
    assert_eq!(doc.get("entityType"), Some(&json!("table")));
    assert!(doc.get("suggest").unwrap().is_array());
}

#[test]
fn table_without_columns_has_empty_column_suggest() {
    let table = TableFactory::bare("empty");
    let doc = TableIndex::new(&table).build_document().unwrap();
    assert_eq!(doc.get("column_suggest"), Some(&json!([])));
    assert_eq!(doc.get("tags"), Some(&json!([])));
}

#[test]
fn missing_database_fails_without_document() {
    let mut table = TableFactory::orders();
    table.database = None;

    let err = TableIndex::new(&table).build_document().unwrap_err();
    match err {
        IndexError::MissingRelation { entity, relation } => {
            assert_eq!(relation, Relation::Database);
            assert_eq!(entity, table.fully_qualified_name);
        }
        other => panic!("expected MissingRelation, got {other:?}"),
    }
}

#[test]
fn missing_service_is_reported_first() {
    let mut table = TableFactory::orders();
    table.service = None;
    table.database_schema = None;

    let err = TableIndex::new(&table).build_document().unwrap_err();
    assert!(matches!(
        err,
        IndexError::MissingRelation { relation: Relation::Service, .. }
    ));
}

#[test]
fn projection_is_idempotent() {
    let table = TableFactory::orders();
    let index = TableIndex::new(&table);

    let first = index.build_document().unwrap();
    let second = index.build_document().unwrap();
    assert_eq!(first, second);
}

#[test]
fn projection_does_not_mutate_table() {
    let table = TableFactory::orders();
    let before = table.clone();
    let _ = TableIndex::new(&table).build_document().unwrap();
    assert_eq!(table, before);
}

#[test]
fn tables_from_catalog_json_project() {
    let table: tessel_search::Table = serde_json::from_value(json!({
        "id": "5f2c0a7e-3a64-4c6e-9b55-2a3f3f0c9d11",
        "name": "events",
        "fullyQualifiedName": "bq.analytics.raw.events",
        "serviceType": "BigQuery",
        "service": {"id": "11111111-1111-4111-8111-111111111111", "type": "databaseService", "name": "bq"},
        "database": {"id": "22222222-2222-4222-8222-222222222222", "type": "database", "name": "analytics"},
        "databaseSchema": {"id": "33333333-3333-4333-8333-333333333333", "type": "databaseSchema", "name": "raw"},
        "columns": [
            {"name": "payload", "dataType": "STRUCT", "children": [
                {"name": "user_id", "dataType": "STRING", "tags": [{"tagFQN": "PII.Sensitive"}]}
            ]}
        ],
        "tableProfile": {"rowCount": 10}
    }))
    .unwrap();

    let doc = TableIndex::new(&table).build_document().unwrap();
    assert_eq!(
        inputs(doc.get("column_suggest").unwrap()),
        [("payload".to_string(), 5), ("payload.user_id".to_string(), 5)]
    );
    assert_eq!(tag_fqns(doc.get("tags").unwrap()), ["PII.Sensitive"]);
    assert!(!doc.contains_key("tableProfile"));
    assert_eq!(doc.get("columns").unwrap()[0]["dataType"], json!("STRUCT"));
}

#[test]
fn root_column_names_project_verbatim() {
    let mut table = TableFactory::bare("readings");
    table.columns = vec![
        Column::new("my\"col"),
        Column::new("geo.point").with_children(vec![Column::new("lat.deg")]),
    ];

    let doc = TableIndex::new(&table).build_document().unwrap();
    assert_eq!(
        inputs(doc.get("column_suggest").unwrap()),
        [
            ("my\"col".to_string(), 5),
            ("geo.point".to_string(), 5),
            ("geo.point.\"lat.deg\"".to_string(), 5),
        ]
    );
}

#[test]
fn null_lists_from_catalog_json_project() {
    let table: tessel_search::Table = serde_json::from_value(json!({
        "id": "5f2c0a7e-3a64-4c6e-9b55-2a3f3f0c9d11",
        "name": "staging",
        "fullyQualifiedName": "bq.analytics.raw.staging",
        "service": {"id": "11111111-1111-4111-8111-111111111111", "type": "databaseService", "name": "bq"},
        "database": {"id": "22222222-2222-4222-8222-222222222222", "type": "database", "name": "analytics"},
        "databaseSchema": {"id": "33333333-3333-4333-8333-333333333333", "type": "databaseSchema", "name": "raw"},
        "columns": null,
        "tags": null,
        "followers": null
    }))
    .unwrap();

    let doc = TableIndex::new(&table).build_document().unwrap();
    assert_eq!(doc.get("column_suggest"), Some(&json!([])));
    assert_eq!(doc.get("tags"), Some(&json!([])));
    assert_eq!(doc.get("followers"), Some(&json!([])));
}
