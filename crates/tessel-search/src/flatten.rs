//! Column flattening.
//!
//! Nested columns are walked depth-first in pre-order. Each emitted
//! [`FlattenColumn`] carries the dotted path from the table root and only
//! that column's own tags.

use serde::{Deserialize, Serialize};

use tessel_core::fqn;

use crate::error::{IndexError, Result};
use crate::model::{Column, TagLabel};

/// A column with its qualified name, as emitted by [`flatten_columns`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenColumn {
    /// Dotted path from the table root to this column.
    pub name: String,
    /// Column description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// This column's own tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagLabel>,
}

/// Flattens a column tree into pre-order with qualified names.
///
/// `parent` is the qualified name of the enclosing column; `None` or an
/// empty string means the columns are at the table root. Parents precede
/// their descendants and siblings keep their input order.
///
/// # Errors
///
/// Returns [`IndexError::InvalidName`] if a nested column name contains a
/// double quote. Root column names are used verbatim and never fail.
///
/// # Example
///
/// ```rust
/// use tessel_search::{Column, flatten_columns};
///
/// let columns = vec![Column::new("address").with_children(vec![Column::new("city")])];
/// let flat = flatten_columns(&columns, None).unwrap();
///
/// let names: Vec<_> = flat.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["address", "address.city"]);
/// ```
pub fn flatten_columns(columns: &[Column], parent: Option<&str>) -> Result<Vec<FlattenColumn>> {
    let parent = parent.filter(|p| !p.is_empty());
    let mut flattened = Vec::with_capacity(columns.len());

    for column in columns {
        let name = qualified_name(parent, &column.name)?;
        let children = match column.children.as_deref() {
            Some(children) => flatten_columns(children, Some(&name))?,
            None => Vec::new(),
        };

        flattened.push(FlattenColumn {
            name,
            description: column.description.clone(),
            tags: column.tags.clone().unwrap_or_default(),
        });
        flattened.extend(children);
    }

    Ok(flattened)
}

fn qualified_name(parent: Option<&str>, name: &str) -> Result<String> {
    let Some(parent) = parent else {
        return Ok(name.to_string());
    };
    fqn::add(parent, name).map_err(|e| IndexError::InvalidName {
        message: e.to_string(),
    })
}
