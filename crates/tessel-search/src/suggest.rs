//! Weighted autocomplete suggestions.

use serde::{Deserialize, Serialize};

/// Weight for most suggestions (qualified names, parents, columns).
pub const DEFAULT_WEIGHT: u32 = 5;

/// Weight for an entity's own name, ranked above everything else.
pub const NAME_WEIGHT: u32 = 10;

/// A single autocomplete entry. Higher weights rank first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Text matched by the completion suggester.
    pub input: String,
    /// Ranking weight.
    pub weight: u32,
}

impl Suggestion {
    /// Creates a suggestion. Empty input is accepted.
    #[must_use]
    pub fn new(input: impl Into<String>, weight: u32) -> Self {
        Self {
            input: input.into(),
            weight,
        }
    }

    /// Creates a suggestion with [`DEFAULT_WEIGHT`].
    #[must_use]
    pub fn with_default_weight(input: impl Into<String>) -> Self {
        Self::new(input, DEFAULT_WEIGHT)
    }
}
