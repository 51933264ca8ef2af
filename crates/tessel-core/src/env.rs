//! Environment variable helpers.
//!
//! Values are trimmed and empty values are treated as unset. Helpers take a
//! lookup function so configuration loaders can be exercised without
//! touching the process environment.

/// Reads a variable from the process environment.
#[must_use]
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Looks up `name`, returning `None` when unset, empty, or whitespace.
pub fn env_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn blank_values_are_unset() {
        let lookup = lookup_from(&[("A", "  "), ("B", " value ")]);
        assert_eq!(env_string(&lookup, "A"), None);
        assert_eq!(env_string(&lookup, "B").as_deref(), Some("value"));
        assert_eq!(env_string(&lookup, "MISSING"), None);
    }
}
