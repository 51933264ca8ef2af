//! Tag aggregation.
//!
//! Splits a collection of tag labels into general tags and the single tier
//! tag. General tags are deduplicated by FQN, keeping first occurrence.
//! When several tier tags are present the last one seen wins.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::TagLabel;

/// Tags partitioned for indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTags {
    /// Non-tier tags, deduplicated by FQN.
    pub tags: Vec<TagLabel>,
    /// The selected tier tag, if any.
    pub tier: Option<TagLabel>,
}

impl ParsedTags {
    /// Partitions `labels` into general tags and a tier tag.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessel_search::{ParsedTags, TagLabel};
    ///
    /// let parsed = ParsedTags::parse([
    ///     TagLabel::new("PII.Sensitive"),
    ///     TagLabel::new("Tier.Tier2"),
    /// ]);
    /// assert_eq!(parsed.tags.len(), 1);
    /// assert_eq!(parsed.tier.unwrap().tag_fqn, "Tier.Tier2");
    /// ```
    pub fn parse<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = TagLabel>,
    {
        let mut seen = HashSet::new();
        let mut parsed = Self::default();

        for label in labels {
            if label.is_tier() {
                if let Some(previous) = parsed.tier.as_ref().filter(|p| p.tag_fqn != label.tag_fqn) {
                    tracing::debug!(
                        replaced = %previous.tag_fqn,
                        selected = %label.tag_fqn,
                        "multiple tier tags present, keeping the last"
                    );
                }
                parsed.tier = Some(label);
            } else if seen.insert(label.tag_fqn.clone()) {
                parsed.tags.push(label);
            }
        }

        parsed
    }
}
