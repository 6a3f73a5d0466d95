//! Entity resolution: folding raw records into canonical entities.
//!
//! Records are grouped by canonical key (see [`crate::normalize`]). Within
//! a group the representative name and source are first-seen in insertion
//! order, the kind is the highest-precedence kind declared by any record,
//! and every contributing source is retained as evidence. Resolution must
//! only run once all adapters have finished: a partial entity set would
//! wrongly treat later-arriving duplicates as new entities.

use std::collections::HashMap;

use tracing::warn;

use crate::entity::{CanonicalEntity, Entity};
use crate::error::InvalidEntityError;
use crate::normalize::canonical_key;

/// Canonical entities keyed by normalized name, in first-seen order.
///
/// The table is the shared identity map for the resolver and the
/// relationship merger: lookups go through the canonical key, iteration
/// follows insertion order so output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct CanonicalTable {
    entries: Vec<CanonicalEntity>,
    index: HashMap<String, usize>,
}

impl CanonicalTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of canonical entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the canonical entity for a raw name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CanonicalEntity> {
        let key = canonical_key(name);
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    /// Returns true if a raw name resolves to an existing entity.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&canonical_key(name))
    }

    /// Folds one record into the table under its canonical key.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEntityError`] when the record's name is blank after
    /// normalization; such records carry no identity and must not merge
    /// into a null-key bucket.
    pub fn upsert(&mut self, record: Entity) -> Result<(), InvalidEntityError> {
        let key = canonical_key(&record.name);
        if key.is_empty() {
            return Err(InvalidEntityError {
                name: record.name,
                source: record.source,
            });
        }

        if let Some(&i) = self.index.get(&key) {
            self.entries[i].absorb(record);
        } else {
            self.index.insert(key, self.entries.len());
            self.entries.push(CanonicalEntity::from_record(record));
        }
        Ok(())
    }

    /// Canonical entities in first-seen order.
    #[must_use]
    pub fn entities(&self) -> &[CanonicalEntity] {
        &self.entries
    }

    /// Consumes the table, yielding entities in first-seen order.
    #[must_use]
    pub fn into_entities(self) -> Vec<CanonicalEntity> {
        self.entries
    }
}

/// The outcome of resolving a combined entity list.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Canonical entities keyed by normalized name.
    pub table: CanonicalTable,
    /// Records dropped because their name was blank after normalization.
    pub dropped: Vec<InvalidEntityError>,
}

/// Resolves the combined entity list from all adapters.
///
/// Blank-name records are dropped with a warning instead of aborting the
/// run. The operation is idempotent: resolving the canonical output again
/// yields an identical entity set.
#[must_use]
pub fn resolve(entities: impl IntoIterator<Item = Entity>) -> Resolution {
    let mut resolution = Resolution::default();
    for record in entities {
        if let Err(invalid) = resolution.table.upsert(record) {
            warn!(
                source = %invalid.source,
                name = %invalid.name,
                "dropping entity with blank name"
            );
            resolution.dropped.push(invalid);
        }
    }
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::source::SourceId;

    #[test]
    fn test_case_and_suffix_variants_merge() {
        let resolution = resolve(vec![
            Entity::company("Acme Inc.", SourceId::Edgar),
            Entity::company("acme inc", SourceId::CompaniesHouse),
            Entity::company("ACME", SourceId::Fec),
        ]);

        assert!(resolution.dropped.is_empty());
        assert_eq!(resolution.table.len(), 1);

        let acme = &resolution.table.entities()[0];
        assert_eq!(acme.name, "Acme Inc.");
        assert_eq!(acme.source, SourceId::Edgar);
        assert_eq!(
            acme.sources,
            vec![SourceId::Edgar, SourceId::CompaniesHouse, SourceId::Fec]
        );
    }

    #[test]
    fn test_distinct_keys_stay_distinct() {
        let resolution = resolve(vec![
            Entity::company("Acme Inc.", SourceId::Edgar),
            Entity::company("Acme Capital", SourceId::Edgar),
        ]);
        assert_eq!(resolution.table.len(), 2);
    }

    #[test]
    fn test_type_conflict_resolved_by_precedence() {
        // Same key declared as address, officer, and company: company wins,
        // regardless of arrival order.
        let resolution = resolve(vec![
            Entity::address("Meridian", SourceId::CompaniesHouse),
            Entity::officer("meridian", SourceId::CompaniesHouse),
            Entity::company("MERIDIAN", SourceId::Edgar),
        ]);
        assert_eq!(resolution.table.len(), 1);
        let merged = &resolution.table.entities()[0];
        assert_eq!(merged.kind, EntityKind::Company);
        // Representative name is still first-seen.
        assert_eq!(merged.name, "Meridian");
        assert_eq!(merged.source, SourceId::CompaniesHouse);
    }

    #[test]
    fn test_blank_names_dropped_not_merged() {
        let resolution = resolve(vec![
            Entity::company("Acme", SourceId::Edgar),
            Entity::company("   ", SourceId::CompaniesHouse),
            Entity::company(".,", SourceId::Fec),
        ]);
        assert_eq!(resolution.table.len(), 1);
        assert_eq!(resolution.dropped.len(), 2);
        assert_eq!(resolution.dropped[0].source, SourceId::CompaniesHouse);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let resolution = resolve(vec![
            Entity::company("Zeta Ltd", SourceId::Edgar),
            Entity::company("Alpha Inc.", SourceId::Edgar),
            Entity::company("zeta", SourceId::Fec),
        ]);
        let names: Vec<&str> = resolution
            .table
            .entities()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta Ltd", "Alpha Inc."]);
    }

    #[test]
    fn test_lookup_through_any_variant() {
        let resolution = resolve(vec![Entity::company("Acme Inc.", SourceId::Edgar)]);
        let table = resolution.table;
        assert!(table.contains("ACME, INC."));
        assert!(table.contains("acme"));
        assert!(!table.contains("Acme Capital"));
        assert_eq!(table.get("acme inc").unwrap().name, "Acme Inc.");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = resolve(vec![
            Entity::company("Acme Inc.", SourceId::Edgar),
            Entity::company("acme inc", SourceId::CompaniesHouse),
            Entity::officer("Jane Doe", SourceId::CompaniesHouse).with_role("director"),
        ]);

        let as_records: Vec<Entity> = first
            .table
            .entities()
            .iter()
            .map(|c| {
                let mut record = Entity::new(c.kind, c.name.clone(), c.source);
                record.role.clone_from(&c.role);
                record.jurisdiction.clone_from(&c.jurisdiction);
                record.registry_number.clone_from(&c.registry_number);
                record
            })
            .collect();

        let second = resolve(as_records);
        assert!(second.dropped.is_empty());

        // Evidence lists collapse to the representative source on re-entry;
        // compare the identity-bearing fields.
        let summarize = |table: &CanonicalTable| -> Vec<(EntityKind, String)> {
            table
                .entities()
                .iter()
                .map(|e| (e.kind, e.name.clone()))
                .collect()
        };
        assert_eq!(summarize(&first.table), summarize(&second.table));
    }
}
