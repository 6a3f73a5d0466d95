//! Adapter for the US securities filer database (EDGAR).
//!
//! The queried organization becomes a company entity carrying its CIK;
//! every filing row that names a distinct filer contributes a filer entity
//! and a `filed_by` edge from the filer to the queried company.

use crate::adapters::SourceRecords;
use crate::entity::Entity;
use crate::error::SourceAdapterError;
use crate::payload::EdgarPayload;
use crate::relationship::{Relationship, RelationshipKind};
use crate::source::SourceId;

/// Extracts entities and relationships from an EDGAR payload.
///
/// # Errors
///
/// Returns [`SourceAdapterError`] when the queried company name is blank.
pub fn extract(payload: &EdgarPayload) -> Result<SourceRecords, SourceAdapterError> {
    let company = payload.company_name.trim();
    if company.is_empty() {
        return Err(SourceAdapterError::new(
            SourceId::Edgar,
            "payload has a blank company_name",
        ));
    }

    let mut records = SourceRecords::new();

    let mut company_entity = Entity::company(company, SourceId::Edgar).with_jurisdiction("US");
    if let Some(cik) = payload.cik.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        company_entity = company_entity.with_registry_number(cik);
    }
    records.entities.push(company_entity);

    for filing in &payload.filings {
        let Some(filer) = filing.filer.as_deref().map(str::trim).filter(|f| !f.is_empty())
        else {
            continue;
        };
        records
            .entities
            .push(Entity::company(filer, SourceId::Edgar));
        records
            .relationships
            .push(Relationship::new(filer, company, RelationshipKind::FiledBy));
    }

    Ok(records)
}
