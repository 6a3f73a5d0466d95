//! Adapter for the Japanese corporate-number registry.
//!
//! The registry lookup yields the company and its corporate number plus
//! registered address; the chief executive, when the company website
//! discloses one, becomes an officer entity with a `ceo_of` edge.

use crate::adapters::SourceRecords;
use crate::entity::Entity;
use crate::error::SourceAdapterError;
use crate::payload::JapanCorporatePayload;
use crate::relationship::{Relationship, RelationshipKind};
use crate::source::SourceId;

/// Extracts entities and relationships from a Japan corporate payload.
///
/// # Errors
///
/// Returns [`SourceAdapterError`] when the queried company name is blank.
pub fn extract(payload: &JapanCorporatePayload) -> Result<SourceRecords, SourceAdapterError> {
    let company = payload.company_name.trim();
    if company.is_empty() {
        return Err(SourceAdapterError::new(
            SourceId::JapanCorporate,
            "payload has a blank company_name",
        ));
    }

    let mut records = SourceRecords::new();

    let mut company_entity =
        Entity::company(company, SourceId::JapanCorporate).with_jurisdiction("JP");
    if let Some(number) = payload
        .corporate_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    {
        company_entity = company_entity.with_registry_number(number);
    }
    records.entities.push(company_entity);

    if let Some(ceo) = payload.ceo.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        records
            .entities
            .push(Entity::officer(ceo, SourceId::JapanCorporate).with_role("ceo"));
        records
            .relationships
            .push(Relationship::new(company, ceo, RelationshipKind::CeoOf));
    }

    if let Some(address) = payload
        .address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
    {
        records
            .entities
            .push(Entity::address(address, SourceId::JapanCorporate));
        records.relationships.push(Relationship::new(
            company,
            address,
            RelationshipKind::RegisteredAddress,
        ));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;

    fn sample_payload() -> JapanCorporatePayload {
        JapanCorporatePayload {
            company_name: "トヨタ自動車株式会社".to_string(),
            corporate_number: Some("1180301018771".to_string()),
            address: Some("愛知県豊田市トヨタ町1番地".to_string()),
            ceo: Some("佐藤恒治".to_string()),
            website_url: Some("https://global.toyota".to_string()),
        }
    }

    #[test]
    fn test_company_carries_corporate_number() {
        let records = extract(&sample_payload()).unwrap();
        let company = &records.entities[0];
        assert_eq!(company.kind, EntityKind::Company);
        assert_eq!(company.registry_number.as_deref(), Some("1180301018771"));
        assert_eq!(company.jurisdiction.as_deref(), Some("JP"));
    }

    #[test]
    fn test_ceo_becomes_ceo_of_edge() {
        let records = extract(&sample_payload()).unwrap();
        let ceo = records
            .entities
            .iter()
            .find(|e| e.kind == EntityKind::Officer)
            .unwrap();
        assert_eq!(ceo.name, "佐藤恒治");
        assert_eq!(ceo.role.as_deref(), Some("ceo"));

        let edge = records
            .relationships
            .iter()
            .find(|r| r.kind == RelationshipKind::CeoOf)
            .unwrap();
        assert_eq!(edge.from, "トヨタ自動車株式会社");
        assert_eq!(edge.to, "佐藤恒治");
    }

    #[test]
    fn test_address_becomes_registered_address_edge() {
        let records = extract(&sample_payload()).unwrap();
        let edge = records
            .relationships
            .iter()
            .find(|r| r.kind == RelationshipKind::RegisteredAddress)
            .unwrap();
        assert_eq!(edge.to, "愛知県豊田市トヨタ町1番地");
    }

    #[test]
    fn test_missing_optionals_yield_company_only() {
        let payload = JapanCorporatePayload {
            company_name: "BMSG".to_string(),
            corporate_number: None,
            address: None,
            ceo: None,
            website_url: None,
        };
        let records = extract(&payload).unwrap();
        assert_eq!(records.entities.len(), 1);
        assert!(records.relationships.is_empty());
        assert!(records.entities[0].registry_number.is_none());
    }

    #[test]
    fn test_blank_company_name_is_malformed() {
        let payload = JapanCorporatePayload {
            company_name: " ".to_string(),
            corporate_number: None,
            address: None,
            ceo: None,
            website_url: None,
        };
        let err = extract(&payload).unwrap_err();
        assert_eq!(err.source, SourceId::JapanCorporate);
    }
}
