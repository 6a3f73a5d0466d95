//! Directed, typed relationships between entities.
//!
//! At ingestion time the endpoints are entity names exactly as the
//! originating record spelled them; the merger later rewrites both ends to
//! canonical representative names and deduplicates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a directed relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// Company → officer appointment.
    OfficerOf,
    /// Company → chief executive (Japanese website info).
    CeoOf,
    /// Filer → subject company of a securities filing.
    FiledBy,
    /// Company → registered address.
    RegisteredAddress,
    /// Contributor → political committee or candidate.
    ContributedTo,
    /// Company → person with significant control.
    ControlledBy,
}

impl RelationshipKind {
    /// Stable wire name, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OfficerOf => "officer_of",
            Self::CeoOf => "ceo_of",
            Self::FiledBy => "filed_by",
            Self::RegisteredAddress => "registered_address",
            Self::ContributedTo => "contributed_to",
            Self::ControlledBy => "controlled_by",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, typed edge between two entities, identified by name.
///
/// # Examples
///
/// ```
/// use transparency_graph::{Relationship, RelationshipKind};
///
/// let edge = Relationship::new("Acme Inc.", "Jane Doe", RelationshipKind::OfficerOf);
/// assert_eq!(edge.kind.as_str(), "officer_of");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    /// Name of the edge origin, as spelled by the originating record.
    pub from: String,

    /// Name of the edge target, as spelled by the originating record.
    pub to: String,

    /// Relationship kind.
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
}

impl Relationship {
    /// Creates a relationship between two named endpoints.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: RelationshipKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
        }
    }

    /// Returns true if both endpoints name the same entity.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_serializes_type_field() {
        let edge = Relationship::new("Acme Inc.", "Jane Doe", RelationshipKind::OfficerOf);
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["from"], "Acme Inc.");
        assert_eq!(json["to"], "Jane Doe");
        assert_eq!(json["type"], "officer_of");
    }

    #[test]
    fn test_relationship_round_trip() {
        let edge = Relationship::new("Acme", "123 Main St", RelationshipKind::RegisteredAddress);
        let json = serde_json::to_string(&edge).unwrap();
        let back: Relationship = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(RelationshipKind::OfficerOf.as_str(), "officer_of");
        assert_eq!(RelationshipKind::CeoOf.as_str(), "ceo_of");
        assert_eq!(RelationshipKind::FiledBy.as_str(), "filed_by");
        assert_eq!(
            RelationshipKind::RegisteredAddress.as_str(),
            "registered_address"
        );
        assert_eq!(RelationshipKind::ContributedTo.as_str(), "contributed_to");
        assert_eq!(RelationshipKind::ControlledBy.as_str(), "controlled_by");
    }

    #[test]
    fn test_self_loop_detection() {
        let loop_edge = Relationship::new("Acme", "Acme", RelationshipKind::FiledBy);
        assert!(loop_edge.is_self_loop());

        let edge = Relationship::new("Acme", "Jane", RelationshipKind::OfficerOf);
        assert!(!edge.is_self_loop());
    }
}
