//! Relationship merging: endpoint canonicalization and edge dedup.
//!
//! Every edge endpoint is rewritten to the representative name of its
//! canonical entity. Endpoints that resolve to no entity get a synthesized
//! unknown-kind placeholder first, so the graph is always edge-closed.
//! After rewriting, exact `(from, to, type)` duplicates collapse to the
//! first occurrence. Self-loops are retained.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::entity::Entity;
use crate::normalize::is_blank;
use crate::relationship::{Relationship, RelationshipKind};
use crate::resolver::CanonicalTable;

/// The outcome of merging raw relationships against the canonical table.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    /// Canonicalized, deduplicated edges in first-occurrence order.
    pub relationships: Vec<Relationship>,
    /// Display names of placeholder entities synthesized for dangling
    /// references, in synthesis order.
    pub synthesized: Vec<String>,
    /// Edges dropped because an endpoint was blank after normalization.
    pub dropped: Vec<Relationship>,
}

/// Rewrites, repairs, and deduplicates the raw relationship list.
///
/// The table is mutated: dangling endpoints insert unknown-kind,
/// unknown-source placeholders so that every surviving edge references an
/// entity present in the table.
#[must_use]
pub fn merge_relationships(
    raw: impl IntoIterator<Item = Relationship>,
    table: &mut CanonicalTable,
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    let mut seen: HashSet<(String, String, RelationshipKind)> = HashSet::new();

    for edge in raw {
        if is_blank(&edge.from) || is_blank(&edge.to) {
            warn!(from = %edge.from, to = %edge.to, kind = %edge.kind,
                "dropping relationship with blank endpoint");
            outcome.dropped.push(edge);
            continue;
        }

        let (Some(from), Some(to)) = (
            canonicalize_endpoint(&edge.from, table, &mut outcome),
            canonicalize_endpoint(&edge.to, table, &mut outcome),
        ) else {
            outcome.dropped.push(edge);
            continue;
        };

        let triple = (from.clone(), to.clone(), edge.kind);
        if seen.insert(triple) {
            outcome.relationships.push(Relationship::new(from, to, edge.kind));
        }
    }

    outcome
}

/// Resolves an endpoint name to its canonical representative, synthesizing
/// a placeholder entity when the reference dangles.
///
/// Returns `None` when the placeholder cannot be inserted because the name
/// normalizes to a blank key; the caller drops the edge.
fn canonicalize_endpoint(
    name: &str,
    table: &mut CanonicalTable,
    outcome: &mut MergeOutcome,
) -> Option<String> {
    if let Some(entity) = table.get(name) {
        return Some(entity.name.clone());
    }

    let display_name = name.trim().to_string();
    debug!(name = %display_name, "synthesizing placeholder entity for dangling reference");
    table.upsert(Entity::unknown(display_name.clone())).ok()?;
    outcome.synthesized.push(display_name.clone());
    Some(display_name)
}
