//! Fully qualified names.
//!
//! A fully qualified name (FQN) is a dot-separated path such as
//! `mysql.shop.public.orders.customer`. A segment that itself contains a
//! dot is wrapped in double quotes (`orders."customer.id"`) so the path can
//! still be split unambiguously. Segments may not contain double quotes.

use crate::error::{Error, Result};

const SEPARATOR: char = '.';
const QUOTE: char = '"';

/// Appends `name` to `prefix`, quoting `name` if required.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `name` contains a double quote.
///
/// # Example
///
/// ```rust
/// use tessel_core::fqn;
///
/// assert_eq!(fqn::add("orders", "id").unwrap(), "orders.id");
/// assert_eq!(fqn::add("orders", "a.b").unwrap(), "orders.\"a.b\"");
/// ```
pub fn add(prefix: &str, name: &str) -> Result<String> {
    Ok(format!("{prefix}{SEPARATOR}{}", quote_name(name)?))
}

/// Quotes a single segment when it contains the separator.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the segment contains a double quote.
/// This includes segments that already arrive wrapped in quotes.
fn quote_name(name: &str) -> Result<String> {
    if name.contains(QUOTE) {
        return Err(invalid_name(name));
    }

    if name.contains(SEPARATOR) {
        Ok(format!("{QUOTE}{name}{QUOTE}"))
    } else {
        Ok(name.to_string())
    }
}

/// Splits an FQN into its unquoted segments.
///
/// Separators inside quotes do not split.
#[must_use]
pub fn split(fqn: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in fqn.chars() {
        match c {
            QUOTE => in_quotes = !in_quotes,
            SEPARATOR if !in_quotes => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
}

fn invalid_name(name: &str) -> Error {
    Error::InvalidInput(format!("name '{name}' must not contain double quotes"))
}
