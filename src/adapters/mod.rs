//! Source adapters: one per registry, payload in, records out.
//!
//! Adapters are total over well-formed payloads: a missing optional field
//! maps to an absent attribute, never a crash. A payload that cannot be
//! adapted at all (blank queried name) fails with a [`SourceAdapterError`]
//! that the pipeline recovers from per source.

pub mod companies_house;
pub mod edgar;
pub mod fec;
pub mod japan;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::SourceAdapterError;
use crate::payload::SourcePayload;
use crate::relationship::Relationship;

/// The normalized output of one adapter: raw entities and relationships,
/// each already tagged with the originating source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecords {
    /// Entity records in emission order.
    pub entities: Vec<Entity>,
    /// Relationship records in emission order.
    pub relationships: Vec<Relationship>,
}

impl SourceRecords {
    /// Creates an empty record set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no entities and no relationships were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.relationships.is_empty()
    }
}

/// Dispatches a tagged payload to its source's adapter.
///
/// # Errors
///
/// Returns [`SourceAdapterError`] when the payload is malformed beyond
/// per-record repair (e.g. blank queried company name).
pub fn extract(payload: &SourcePayload) -> Result<SourceRecords, SourceAdapterError> {
    match payload {
        SourcePayload::Edgar(p) => edgar::extract(p),
        SourcePayload::CompaniesHouse(p) => companies_house::extract(p),
        SourcePayload::JapanCorporate(p) => japan::extract(p),
        SourcePayload::Fec(p) => fec::extract(p),
    }
}
