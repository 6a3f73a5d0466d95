//! Adapter for the UK corporate registry (Companies House).
//!
//! Produces the queried company, its officer appointments (`officer_of`),
//! registered addresses (`registered_address`), and persons with
//! significant control (`controlled_by`). Edges run from the company to the
//! related party, matching how the registry reports them.

use crate::adapters::SourceRecords;
use crate::entity::Entity;
use crate::error::SourceAdapterError;
use crate::payload::CompaniesHousePayload;
use crate::relationship::{Relationship, RelationshipKind};
use crate::source::SourceId;

/// Extracts entities and relationships from a Companies House payload.
///
/// # Errors
///
/// Returns [`SourceAdapterError`] when the queried company name is blank.
pub fn extract(payload: &CompaniesHousePayload) -> Result<SourceRecords, SourceAdapterError> {
    let company = payload.company_name.trim();
    if company.is_empty() {
        return Err(SourceAdapterError::new(
            SourceId::CompaniesHouse,
            "payload has a blank company_name",
        ));
    }

    let mut records = SourceRecords::new();

    let mut company_entity =
        Entity::company(company, SourceId::CompaniesHouse).with_jurisdiction("UK");
    if let Some(number) = payload
        .company_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    {
        company_entity = company_entity.with_registry_number(number);
    }
    records.entities.push(company_entity);

    for officer in &payload.officers {
        let name = officer.name.trim();
        if name.is_empty() {
            continue;
        }
        let mut entity = Entity::officer(name, SourceId::CompaniesHouse);
        if let Some(role) = officer.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            entity = entity.with_role(role);
        }
        records.entities.push(entity);
        records
            .relationships
            .push(Relationship::new(company, name, RelationshipKind::OfficerOf));
    }

    for address in &payload.addresses {
        let address = address.trim();
        if address.is_empty() {
            continue;
        }
        records
            .entities
            .push(Entity::address(address, SourceId::CompaniesHouse));
        records.relationships.push(Relationship::new(
            company,
            address,
            RelationshipKind::RegisteredAddress,
        ));
    }

    for psc in &payload.psc {
        let name = psc.name.trim();
        if name.is_empty() {
            continue;
        }
        let entity = if psc.is_corporate() {
            Entity::company(name, SourceId::CompaniesHouse)
        } else {
            Entity::officer(name, SourceId::CompaniesHouse)
                .with_role("person-with-significant-control")
        };
        records.entities.push(entity);
        records.relationships.push(Relationship::new(
            company,
            name,
            RelationshipKind::ControlledBy,
        ));
    }

    Ok(records)
}
