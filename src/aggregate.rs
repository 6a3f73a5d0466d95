//! Summary statistics and per-dimension distributions.
//!
//! The visualization layer renders ranked bars and pies straight from
//! these structures, so every grouping is deterministically ordered:
//! descending count, ties broken by the discriminator's first-seen order.

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entity::CanonicalEntity;
use crate::payload::RecipientTotal;
use crate::relationship::Relationship;

/// Bucket label for records whose discriminator is missing or empty.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Coalesces an empty or whitespace-only discriminator into the unknown
/// bucket, so downstream stages can assume non-empty labels.
#[must_use]
pub fn coalesce_label(label: &str) -> &str {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        UNKNOWN_BUCKET
    } else {
        trimmed
    }
}

/// One label/count pair of a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionEntry {
    /// Discriminator value.
    pub label: String,
    /// Number of records with this discriminator.
    pub count: usize,
}

/// An ordered label → count mapping.
///
/// Serializes as a JSON object whose keys appear in ranked order
/// (descending count, first-seen tiebreak), which is exactly the order the
/// chart layer consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    entries: Vec<DistributionEntry>,
}

impl Distribution {
    /// Counts the given labels into a ranked distribution.
    ///
    /// Empty labels land in the `"unknown"` bucket. Ordering is descending
    /// by count; equal counts keep the order in which their label first
    /// appeared in the input.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<DistributionEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for label in labels {
            let label = coalesce_label(label.as_ref()).to_string();
            if let Some(&i) = index.get(&label) {
                entries[i].count += 1;
            } else {
                index.insert(label.clone(), entries.len());
                entries.push(DistributionEntry { label, count: 1 });
            }
        }

        // Stable sort keeps first-seen order among equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Count for one label, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
    }

    /// Sum of all bucket counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the distribution has no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ranked order.
    #[must_use]
    pub fn entries(&self) -> &[DistributionEntry] {
        &self.entries
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Distribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = Distribution;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of label to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, count)) = access.next_entry::<String, usize>()? {
                    entries.push(DistributionEntry { label, count });
                }
                Ok(Distribution { entries })
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// Per-dimension breakdowns of the final graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Entity counts grouped by entity type.
    pub by_entity_type: Distribution,

    /// Relationship counts grouped by relationship type.
    pub by_relationship_type: Distribution,

    /// Entity counts grouped by representative source.
    pub by_source: Distribution,

    /// Spelling variants of the queried organization's name.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub name_variants: Vec<String>,

    /// Per-recipient contribution rollup, when the contributions feed
    /// contributed to this run.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contribution_totals: Option<BTreeMap<String, RecipientTotal>>,
}

impl Analysis {
    /// Computes the three core distributions from the final graph.
    #[must_use]
    pub fn compute(entities: &[CanonicalEntity], relationships: &[Relationship]) -> Self {
        Self {
            by_entity_type: Distribution::from_labels(entities.iter().map(|e| e.kind.as_str())),
            by_relationship_type: Distribution::from_labels(
                relationships.iter().map(|r| r.kind.as_str()),
            ),
            by_source: Distribution::from_labels(entities.iter().map(|e| e.source.as_str())),
            name_variants: Vec::new(),
            contribution_totals: None,
        }
    }
}

/// Total counts of the final graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of canonical entities.
    pub total_entities: usize,
    /// Number of deduplicated relationships.
    pub total_relationships: usize,
}

impl Summary {
    /// Computes totals from the final graph.
    #[must_use]
    pub fn compute(entities: &[CanonicalEntity], relationships: &[Relationship]) -> Self {
        Self {
            total_entities: entities.len(),
            total_relationships: relationships.len(),
        }
    }
}
