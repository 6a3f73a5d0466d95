//! Adapter for the political-contributions feed (FEC schedule A).
//!
//! The contributor becomes a company entity; each contribution row with a
//! resolvable recipient contributes a committee entity and a
//! `contributed_to` edge. Duplicate rows for the same recipient are fine
//! here; the merger collapses identical edges later.

use crate::adapters::SourceRecords;
use crate::entity::Entity;
use crate::error::SourceAdapterError;
use crate::payload::FecPayload;
use crate::relationship::{Relationship, RelationshipKind};
use crate::source::SourceId;

/// Extracts entities and relationships from a contributions payload.
///
/// # Errors
///
/// Returns [`SourceAdapterError`] when the contributor name is blank.
pub fn extract(payload: &FecPayload) -> Result<SourceRecords, SourceAdapterError> {
    let contributor = payload.company_name.trim();
    if contributor.is_empty() {
        return Err(SourceAdapterError::new(
            SourceId::Fec,
            "payload has a blank company_name",
        ));
    }

    let mut records = SourceRecords::new();
    records
        .entities
        .push(Entity::company(contributor, SourceId::Fec));

    for row in &payload.contributions {
        let Some(recipient) = row.recipient() else {
            continue;
        };
        records
            .entities
            .push(Entity::committee(recipient, SourceId::Fec));
        records.relationships.push(Relationship::new(
            contributor,
            recipient,
            RelationshipKind::ContributedTo,
        ));
    }

    Ok(records)
}
