//! Property-based tests for column flattening.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;

use tessel_search::{Column, FlattenColumn, TagLabel, flatten_columns};
use tessel_test_utils::ColumnFactory;

/// Generates a column tree of bounded depth and fan-out.
fn arb_columns() -> impl Strategy<Value = Vec<Column>> {
    let leaf = ("[a-z][a-z0-9_]{0,6}", prop::option::of(prop::bool::ANY)).prop_map(
        |(name, tagged)| {
            let column = Column::new(name);
            match tagged {
                Some(true) => column.with_tags(vec![TagLabel::new("PII.Sensitive")]),
                Some(false) => column.with_tags(vec![]),
                None => column,
            }
        },
    );

    let tree = leaf.prop_recursive(4, 32, 4, |inner| {
        ("[a-z][a-z0-9_]{0,6}", prop::collection::vec(inner, 1..4))
            .prop_map(|(name, children)| Column::new(name).with_children(children))
    });

    prop::collection::vec(tree, 0..5)
}

fn count(columns: &[Column]) -> usize {
    columns
        .iter()
        .map(|c| 1 + c.children.as_deref().map_or(0, count))
        .sum()
}

/// Expected pre-order (name, own tags) built independently of the flattener.
fn expected(columns: &[Column], prefix: &str, out: &mut Vec<(String, Vec<TagLabel>)>) {
    for column in columns {
        let name = if prefix.is_empty() {
            column.name.clone()
        } else {
            format!("{prefix}.{}", column.name)
        };
        out.push((name.clone(), column.tags.clone().unwrap_or_default()));
        if let Some(children) = &column.children {
            expected(children, &name, out);
        }
    }
}

fn actual(flat: &[FlattenColumn]) -> Vec<(String, Vec<TagLabel>)> {
    flat.iter().map(|c| (c.name.clone(), c.tags.clone())).collect()
}

proptest! {
    #[test]
    fn one_entry_per_node(columns in arb_columns()) {
        let flat = flatten_columns(&columns, None).unwrap();
        prop_assert_eq!(flat.len(), count(&columns));
    }

    #[test]
    fn names_are_root_paths_in_pre_order_with_own_tags(columns in arb_columns()) {
        let flat = flatten_columns(&columns, None).unwrap();
        let mut want = Vec::new();
        expected(&columns, "", &mut want);
        prop_assert_eq!(actual(&flat), want);
    }

    #[test]
    fn parents_precede_descendants(columns in arb_columns()) {
        let flat = flatten_columns(&columns, None).unwrap();
        for (i, column) in flat.iter().enumerate() {
            if let Some((parent, _)) = column.name.rsplit_once('.') {
                prop_assert!(flat[..i].iter().any(|earlier| earlier.name == parent));
            }
        }
    }
}

#[test]
fn deep_chain_produces_full_path() {
    let flat = flatten_columns(&ColumnFactory::chain(6), None).unwrap();
    assert_eq!(flat.len(), 6);
    assert_eq!(flat.last().unwrap().name, "c0.c1.c2.c3.c4.c5");
}
