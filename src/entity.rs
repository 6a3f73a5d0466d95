//! Entity records and canonical entities.
//!
//! Adapters emit raw [`Entity`] records, one per mention of a real-world
//! actor in a source payload. The resolver folds mentions that share a
//! canonical key into a single [`CanonicalEntity`] that remembers every
//! contributing source.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::source::SourceId;

/// Classification of entity records.
///
/// The set is closed. When records with the same canonical key disagree on
/// their kind, the resolver picks the highest-precedence kind rather than
/// failing: company > officer > committee > address > unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A registered company or other corporate body.
    Company,
    /// A company officer, director, or person with significant control.
    Officer,
    /// A political committee or contribution recipient.
    Committee,
    /// A registered or service address.
    Address,
    /// Kind could not be determined (synthesized placeholders).
    Unknown,
}

impl EntityKind {
    /// Merge precedence; lower wins when grouped records disagree.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Company => 0,
            Self::Officer => 1,
            Self::Committee => 2,
            Self::Address => 3,
            Self::Unknown => 4,
        }
    }

    /// Stable wire name, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Officer => "officer",
            Self::Committee => "committee",
            Self::Address => "address",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw entity record as produced by a source adapter.
///
/// `name` is the display form exactly as the source provided it; identity
/// comparison happens on the canonical key derived by the normalizer, never
/// on the display name itself.
///
/// # Examples
///
/// ```
/// use transparency_graph::{Entity, EntityKind, SourceId};
///
/// let entity = Entity::company("Acme Inc.", SourceId::Edgar);
/// assert_eq!(entity.kind, EntityKind::Company);
/// assert_eq!(entity.name, "Acme Inc.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity classification.
    #[serde(rename = "type")]
    pub kind: EntityKind,

    /// Display name, as provided by the source. Not assumed unique.
    pub name: String,

    /// Originating registry or feed.
    pub source: SourceId,

    /// Officer role, when the source records one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,

    /// Company jurisdiction, when the source records one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub jurisdiction: Option<String>,

    /// Registry number (CIK, Companies House number, corporate number).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub registry_number: Option<String>,
}

impl Entity {
    /// Creates an entity record of the given kind.
    #[must_use]
    pub fn new(kind: EntityKind, name: impl Into<String>, source: SourceId) -> Self {
        Self {
            kind,
            name: name.into(),
            source,
            role: None,
            jurisdiction: None,
            registry_number: None,
        }
    }

    /// Creates a company record.
    #[must_use]
    pub fn company(name: impl Into<String>, source: SourceId) -> Self {
        Self::new(EntityKind::Company, name, source)
    }

    /// Creates an officer record.
    #[must_use]
    pub fn officer(name: impl Into<String>, source: SourceId) -> Self {
        Self::new(EntityKind::Officer, name, source)
    }

    /// Creates a committee record.
    #[must_use]
    pub fn committee(name: impl Into<String>, source: SourceId) -> Self {
        Self::new(EntityKind::Committee, name, source)
    }

    /// Creates an address record.
    #[must_use]
    pub fn address(name: impl Into<String>, source: SourceId) -> Self {
        Self::new(EntityKind::Address, name, source)
    }

    /// Creates an unknown-kind placeholder record.
    #[must_use]
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::new(EntityKind::Unknown, name, SourceId::Unknown)
    }

    /// Sets the officer role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the company jurisdiction.
    #[must_use]
    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = Some(jurisdiction.into());
        self
    }

    /// Sets the registry number.
    #[must_use]
    pub fn with_registry_number(mut self, number: impl Into<String>) -> Self {
        self.registry_number = Some(number.into());
        self
    }
}

/// A merged entity, one per canonical key in the final graph.
///
/// `name`, `kind`, and `source` are the deterministically chosen
/// representatives; `sources` is the evidence list of every contributing
/// source in first-seen order, for consumers that need provenance (e.g.
/// multi-source badges).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalEntity {
    /// Representative classification (highest-precedence kind in the group).
    #[serde(rename = "type")]
    pub kind: EntityKind,

    /// Representative display name (first-seen original casing).
    pub name: String,

    /// First contributing source, in adapter invocation order.
    pub source: SourceId,

    /// Every contributing source, deduplicated, first-seen order.
    pub sources: Vec<SourceId>,

    /// Officer role, from the first record that carried one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,

    /// Company jurisdiction, from the first record that carried one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub jurisdiction: Option<String>,

    /// Registry number, from the first record that carried one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub registry_number: Option<String>,
}

impl CanonicalEntity {
    /// Starts a canonical entity from its first contributing record.
    #[must_use]
    pub fn from_record(record: Entity) -> Self {
        Self {
            kind: record.kind,
            name: record.name,
            source: record.source,
            sources: vec![record.source],
            role: record.role,
            jurisdiction: record.jurisdiction,
            registry_number: record.registry_number,
        }
    }

    /// Folds another record with the same canonical key into this entity.
    ///
    /// The representative name and source never change (first-seen wins);
    /// the kind is upgraded when the new record has higher precedence, and
    /// optional attributes fill in only when still absent.
    pub fn absorb(&mut self, record: Entity) {
        if record.kind.precedence() < self.kind.precedence() {
            self.kind = record.kind;
        }
        if !self.sources.contains(&record.source) {
            self.sources.push(record.source);
        }
        if self.role.is_none() {
            self.role = record.role;
        }
        if self.jurisdiction.is_none() {
            self.jurisdiction = record.jurisdiction;
        }
        if self.registry_number.is_none() {
            self.registry_number = record.registry_number;
        }
    }

    /// Returns true if more than one source contributed evidence.
    #[must_use]
    pub fn is_multi_source(&self) -> bool {
        self.sources.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_precedence_order() {
        assert!(EntityKind::Company.precedence() < EntityKind::Officer.precedence());
        assert!(EntityKind::Officer.precedence() < EntityKind::Committee.precedence());
        assert!(EntityKind::Committee.precedence() < EntityKind::Address.precedence());
        assert!(EntityKind::Address.precedence() < EntityKind::Unknown.precedence());
    }

    #[test]
    fn test_entity_serializes_type_field() {
        let entity = Entity::company("Acme Inc.", SourceId::Edgar);
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["type"], "company");
        assert_eq!(json["name"], "Acme Inc.");
        assert_eq!(json["source"], "edgar");
        // Absent optional attributes must not appear on the wire.
        assert!(json.get("role").is_none());
        assert!(json.get("jurisdiction").is_none());
    }

    #[test]
    fn test_entity_builder_attributes() {
        let entity = Entity::officer("Jane Doe", SourceId::CompaniesHouse).with_role("director");
        assert_eq!(entity.role.as_deref(), Some("director"));

        let company = Entity::company("Acme Inc.", SourceId::Edgar)
            .with_jurisdiction("US")
            .with_registry_number("0000320193");
        assert_eq!(company.jurisdiction.as_deref(), Some("US"));
        assert_eq!(company.registry_number.as_deref(), Some("0000320193"));
    }

    #[test]
    fn test_absorb_keeps_first_seen_name_and_source() {
        let mut canonical =
            CanonicalEntity::from_record(Entity::company("Acme Inc.", SourceId::Edgar));
        canonical.absorb(Entity::company("ACME INC", SourceId::CompaniesHouse));

        assert_eq!(canonical.name, "Acme Inc.");
        assert_eq!(canonical.source, SourceId::Edgar);
        assert_eq!(
            canonical.sources,
            vec![SourceId::Edgar, SourceId::CompaniesHouse]
        );
        assert!(canonical.is_multi_source());
    }

    #[test]
    fn test_absorb_upgrades_kind_by_precedence() {
        let mut canonical = CanonicalEntity::from_record(Entity::unknown("Acme"));
        canonical.absorb(Entity::officer("acme", SourceId::CompaniesHouse));
        assert_eq!(canonical.kind, EntityKind::Officer);

        canonical.absorb(Entity::company("ACME", SourceId::Edgar));
        assert_eq!(canonical.kind, EntityKind::Company);

        // A lower-precedence record never downgrades the kind.
        canonical.absorb(Entity::address("acme", SourceId::JapanCorporate));
        assert_eq!(canonical.kind, EntityKind::Company);
    }

    #[test]
    fn test_absorb_does_not_duplicate_sources() {
        let mut canonical =
            CanonicalEntity::from_record(Entity::company("Acme", SourceId::Edgar));
        canonical.absorb(Entity::company("acme", SourceId::Edgar));
        assert_eq!(canonical.sources, vec![SourceId::Edgar]);
        assert!(!canonical.is_multi_source());
    }

    #[test]
    fn test_absorb_fills_missing_attributes_only() {
        let mut canonical =
            CanonicalEntity::from_record(Entity::officer("Jane Doe", SourceId::CompaniesHouse));
        canonical.absorb(
            Entity::officer("jane doe", SourceId::Fec).with_role("treasurer"),
        );
        assert_eq!(canonical.role.as_deref(), Some("treasurer"));

        // Once set, later records do not overwrite.
        canonical.absorb(
            Entity::officer("JANE DOE", SourceId::Edgar).with_role("director"),
        );
        assert_eq!(canonical.role.as_deref(), Some("treasurer"));
    }
}
