//! The graph artifact and its caller-owned builder.
//!
//! A [`GraphBuilder`] accumulates raw records across adapters, then a
//! single `build` call runs resolution, relationship merging, and
//! aggregation. The builder is plain owned state, so independent analysis
//! runs can proceed concurrently without any shared module-level state.

use serde::{Deserialize, Serialize};

use crate::adapters::SourceRecords;
use crate::aggregate::{Analysis, Summary};
use crate::entity::{CanonicalEntity, Entity};
use crate::error::{AnalysisError, GraphResult};
use crate::merger::merge_relationships;
use crate::relationship::Relationship;
use crate::resolver::resolve;

/// The final, edge-closed entity-relationship graph with its aggregates.
///
/// This shape is the contract the visualization layer and report exporter
/// pattern-match on; field names are frozen, extensions are additive only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Canonical entities in first-seen order.
    pub entities: Vec<CanonicalEntity>,

    /// Canonicalized, deduplicated relationships.
    pub relationships: Vec<Relationship>,

    /// Per-dimension breakdowns.
    pub analysis: Analysis,

    /// Total counts.
    pub summary: Summary,
}

/// A built graph together with the warnings raised while building it.
#[derive(Debug, Clone, Default)]
pub struct BuiltGraph {
    /// The final graph artifact.
    pub graph: Graph,
    /// Human-readable warnings (dropped records, synthesized placeholders).
    pub warnings: Vec<String>,
}

/// Accumulates raw entities and relationships across adapters.
///
/// # Examples
///
/// ```
/// use transparency_graph::{Entity, GraphBuilder, Relationship, RelationshipKind, SourceId};
///
/// let mut builder = GraphBuilder::new();
/// builder.add_entity(Entity::company("Acme Inc.", SourceId::Edgar));
/// builder.add_relationship(Relationship::new(
///     "Acme Inc.",
///     "Jane Doe",
///     RelationshipKind::OfficerOf,
/// ));
/// let built = builder.build().unwrap();
/// assert_eq!(built.graph.summary.total_entities, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    entities: Vec<Entity>,
    relationships: Vec<Relationship>,
    warnings: Vec<String>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one adapter's output.
    pub fn add_records(&mut self, records: SourceRecords) {
        self.entities.extend(records.entities);
        self.relationships.extend(records.relationships);
    }

    /// Appends a single entity record.
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Appends a single relationship record.
    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// Records a warning to surface on the final report.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns true if no records have been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty()
    }

    /// Resolves, merges, and aggregates the accumulated records.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoUsableSources`] when no valid entity
    /// survives: an empty graph has no analytic value.
    pub fn build(mut self) -> GraphResult<BuiltGraph> {
        if self.entities.is_empty() {
            return Err(AnalysisError::no_usable_sources(
                "no source produced any entities",
            ));
        }

        let resolution = resolve(self.entities);
        for invalid in &resolution.dropped {
            self.warnings.push(invalid.to_string());
        }

        let mut table = resolution.table;
        let outcome = merge_relationships(self.relationships, &mut table);
        for dropped in &outcome.dropped {
            self.warnings.push(format!(
                "dropped relationship with blank endpoint: {} -> {} ({})",
                dropped.from, dropped.to, dropped.kind
            ));
        }
        for name in &outcome.synthesized {
            self.warnings
                .push(format!("synthesized placeholder entity for '{name}'"));
        }

        if table.is_empty() {
            return Err(AnalysisError::no_usable_sources(
                "every entity record was invalid",
            ));
        }

        let entities = table.into_entities();
        let relationships = outcome.relationships;
        let analysis = Analysis::compute(&entities, &relationships);
        let summary = Summary::compute(&entities, &relationships);

        Ok(BuiltGraph {
            graph: Graph {
                entities,
                relationships,
                analysis,
                summary,
            },
            warnings: self.warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::relationship::RelationshipKind;
    use crate::source::SourceId;

    #[test]
    fn test_build_resolves_merges_and_counts() {
        let mut builder = GraphBuilder::new();
        builder.add_entity(Entity::company("Acme Inc.", SourceId::Edgar));
        builder.add_entity(Entity::company("acme inc", SourceId::CompaniesHouse));
        builder.add_relationship(Relationship::new(
            "ACME INC",
            "Jane Doe",
            RelationshipKind::OfficerOf,
        ));

        let built = builder.build().unwrap();
        let graph = built.graph;

        // One merged company plus the synthesized "Jane Doe".
        assert_eq!(graph.summary.total_entities, 2);
        assert_eq!(graph.summary.total_relationships, 1);
        assert_eq!(graph.entities[0].name, "Acme Inc.");
        assert_eq!(graph.entities[1].kind, EntityKind::Unknown);
        assert_eq!(graph.relationships[0].from, "Acme Inc.");

        assert!(built
            .warnings
            .iter()
            .any(|w| w.contains("Jane Doe")));
    }

    #[test]
    fn test_build_empty_is_terminal() {
        let err = GraphBuilder::new().build().unwrap_err();
        assert!(err.is_terminal());
    }

    #[test]
    fn test_build_all_invalid_is_terminal() {
        let mut builder = GraphBuilder::new();
        builder.add_entity(Entity::company("   ", SourceId::Edgar));
        let err = builder.build().unwrap_err();
        assert!(err.is_terminal());
    }

    #[test]
    fn test_counts_match_lists() {
        let mut builder = GraphBuilder::new();
        builder.add_records(SourceRecords {
            entities: vec![
                Entity::company("Acme Inc.", SourceId::Edgar),
                Entity::officer("Jane Doe", SourceId::CompaniesHouse),
            ],
            relationships: vec![Relationship::new(
                "Acme Inc.",
                "Jane Doe",
                RelationshipKind::OfficerOf,
            )],
        });

        let built = builder.build().unwrap();
        assert_eq!(
            built.graph.summary.total_entities,
            built.graph.entities.len()
        );
        assert_eq!(
            built.graph.summary.total_relationships,
            built.graph.relationships.len()
        );
        assert_eq!(
            built.graph.analysis.by_entity_type.total(),
            built.graph.entities.len()
        );
    }

    #[test]
    fn test_graph_serialization_shape() {
        let mut builder = GraphBuilder::new();
        builder.add_entity(Entity::company("Acme Inc.", SourceId::Edgar));
        let built = builder.build().unwrap();

        let json = serde_json::to_value(&built.graph).unwrap();
        assert!(json["entities"].is_array());
        assert!(json["relationships"].is_array());
        assert!(json["analysis"]["by_entity_type"].is_object());
        assert!(json["analysis"]["by_relationship_type"].is_object());
        assert!(json["analysis"]["by_source"].is_object());
        assert_eq!(json["summary"]["total_entities"], 1);
        assert_eq!(json["summary"]["total_relationships"], 0);
    }

    #[test]
    fn test_builder_warn_passthrough() {
        let mut builder = GraphBuilder::new();
        builder.add_entity(Entity::company("Acme Inc.", SourceId::Edgar));
        builder.warn("source 'companies_house' skipped");
        let built = builder.build().unwrap();
        assert!(built
            .warnings
            .contains(&"source 'companies_house' skipped".to_string()));
    }
}
