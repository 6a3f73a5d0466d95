//! Raw per-source payloads.
//!
//! Each registry returns its own shape; those shapes are modeled as a
//! closed set of tagged variants so adapters pattern-match on the source
//! tag instead of probing ad hoc fields. Field names mirror what the fetch
//! collaborators hand over as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SourceAdapterError;
use crate::source::SourceId;

/// One filing row from the EDGAR full-text search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgarFiling {
    /// Name of the filing entity, when the search result carries one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub filer: Option<String>,

    /// Form type (e.g. "10-K").
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub form_type: Option<String>,

    /// Filing date as reported by EDGAR.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_date: Option<String>,
}

/// Raw payload from the US securities filer database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgarPayload {
    /// Company name the search was run for.
    pub company_name: String,

    /// Central Index Key, when resolved.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cik: Option<String>,

    /// Filings returned by the search.
    #[serde(default)]
    pub filings: Vec<EdgarFiling>,
}

/// One officer appointment from Companies House.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficerRecord {
    /// Officer name.
    pub name: String,

    /// Officer role (e.g. "director", "secretary").
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
}

/// One person-with-significant-control record from Companies House.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PscRecord {
    /// Name of the controlling person or corporate body.
    pub name: String,

    /// PSC kind as reported by the registry; a kind containing
    /// "corporate-entity" marks a corporate controller.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
}

impl PscRecord {
    /// Returns true if the controller is itself a corporate body.
    #[must_use]
    pub fn is_corporate(&self) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|k| k.contains("corporate-entity"))
    }
}

/// Raw payload from the UK corporate registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompaniesHousePayload {
    /// Company name the search was run for.
    pub company_name: String,

    /// Companies House registration number, when resolved.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub company_number: Option<String>,

    /// Officer appointments.
    #[serde(default)]
    pub officers: Vec<OfficerRecord>,

    /// Registered and service addresses.
    #[serde(default)]
    pub addresses: Vec<String>,

    /// Persons with significant control.
    #[serde(default)]
    pub psc: Vec<PscRecord>,
}

/// Raw payload from the Japanese corporate-number registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JapanCorporatePayload {
    /// Company name the lookup was run for.
    pub company_name: String,

    /// 13-digit corporate number, when resolved.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub corporate_number: Option<String>,

    /// Registered address from the corporate-number registry.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,

    /// Chief executive, when the company website discloses one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ceo: Option<String>,

    /// Company website the CEO information was scraped from.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website_url: Option<String>,
}

/// One schedule-A row from the political-contributions feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRecord {
    /// Recipient name, when reported.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recipient_name: Option<String>,

    /// Receiving committee name; fallback recipient when `recipient_name`
    /// is absent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub committee_name: Option<String>,

    /// Contribution receipt amount in dollars.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub amount: Option<f64>,

    /// Two-year transaction period the row belongs to.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub election_year: Option<i32>,
}

impl ContributionRecord {
    /// Effective recipient: `recipient_name`, falling back to
    /// `committee_name`.
    #[must_use]
    pub fn recipient(&self) -> Option<&str> {
        self.recipient_name
            .as_deref()
            .or(self.committee_name.as_deref())
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

/// Raw payload from the political-contributions feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FecPayload {
    /// Contributor name the search was run for.
    pub company_name: String,

    /// Individual contribution rows.
    #[serde(default)]
    pub contributions: Vec<ContributionRecord>,
}

/// Count and dollar total of contributions to one recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientTotal {
    /// Number of contributions.
    pub count: usize,
    /// Summed receipt amount; rows with no amount count as zero.
    pub amount: f64,
}

impl FecPayload {
    /// Rolls contributions up per recipient.
    ///
    /// Keyed by recipient name in a `BTreeMap` so iteration and
    /// serialization order are deterministic. Rows with no resolvable
    /// recipient are skipped.
    #[must_use]
    pub fn recipient_totals(&self) -> BTreeMap<String, RecipientTotal> {
        let mut totals: BTreeMap<String, RecipientTotal> = BTreeMap::new();
        for row in &self.contributions {
            let Some(recipient) = row.recipient() else {
                continue;
            };
            let entry = totals
                .entry(recipient.to_string())
                .or_insert(RecipientTotal {
                    count: 0,
                    amount: 0.0,
                });
            entry.count += 1;
            entry.amount += row.amount.unwrap_or(0.0);
        }
        totals
    }
}

/// A raw payload tagged with its originating source.
///
/// The `source` tag drives adapter dispatch; unknown tags fail to
/// deserialize rather than falling through to field probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SourcePayload {
    /// US securities filer database.
    Edgar(EdgarPayload),
    /// UK corporate registry.
    CompaniesHouse(CompaniesHousePayload),
    /// Japanese corporate-number registry.
    JapanCorporate(JapanCorporatePayload),
    /// Political-contributions feed.
    Fec(FecPayload),
}

impl SourcePayload {
    /// The source this payload came from.
    #[must_use]
    pub const fn source(&self) -> SourceId {
        match self {
            Self::Edgar(_) => SourceId::Edgar,
            Self::CompaniesHouse(_) => SourceId::CompaniesHouse,
            Self::JapanCorporate(_) => SourceId::JapanCorporate,
            Self::Fec(_) => SourceId::Fec,
        }
    }

    /// The company name the source was queried for.
    #[must_use]
    pub fn company_name(&self) -> &str {
        match self {
            Self::Edgar(p) => &p.company_name,
            Self::CompaniesHouse(p) => &p.company_name,
            Self::JapanCorporate(p) => &p.company_name,
            Self::Fec(p) => &p.company_name,
        }
    }

    /// Parses one source's raw JSON into its typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`SourceAdapterError`] naming the source when the JSON does
    /// not match that source's shape.
    pub fn from_json(
        source: SourceId,
        raw: serde_json::Value,
    ) -> Result<Self, SourceAdapterError> {
        let malformed = |e: serde_json::Error| SourceAdapterError::new(source, e.to_string());
        match source {
            SourceId::Edgar => serde_json::from_value(raw).map(Self::Edgar).map_err(malformed),
            SourceId::CompaniesHouse => serde_json::from_value(raw)
                .map(Self::CompaniesHouse)
                .map_err(malformed),
            SourceId::JapanCorporate => serde_json::from_value(raw)
                .map(Self::JapanCorporate)
                .map_err(malformed),
            SourceId::Fec => serde_json::from_value(raw).map(Self::Fec).map_err(malformed),
            SourceId::Unknown => Err(SourceAdapterError::new(
                source,
                "'unknown' is not a fetchable source",
            )),
        }
    }
}

/// The already-fetched payloads for one analysis run, at most one per
/// source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadSet {
    /// US securities filer payload.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub edgar: Option<EdgarPayload>,

    /// UK corporate-registry payload.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub companies_house: Option<CompaniesHousePayload>,

    /// Japanese corporate-number payload.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub japan_corporate: Option<JapanCorporatePayload>,

    /// Political-contributions payload.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fec: Option<FecPayload>,
}

impl PayloadSet {
    /// An empty payload set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a payload in its source's slot, replacing any previous one.
    pub fn insert(&mut self, payload: SourcePayload) {
        match payload {
            SourcePayload::Edgar(p) => self.edgar = Some(p),
            SourcePayload::CompaniesHouse(p) => self.companies_house = Some(p),
            SourcePayload::JapanCorporate(p) => self.japan_corporate = Some(p),
            SourcePayload::Fec(p) => self.fec = Some(p),
        }
    }

    /// Returns the payload for one source, tagged, if present.
    #[must_use]
    pub fn get(&self, source: SourceId) -> Option<SourcePayload> {
        match source {
            SourceId::Edgar => self.edgar.clone().map(SourcePayload::Edgar),
            SourceId::CompaniesHouse => self
                .companies_house
                .clone()
                .map(SourcePayload::CompaniesHouse),
            SourceId::JapanCorporate => self
                .japan_corporate
                .clone()
                .map(SourcePayload::JapanCorporate),
            SourceId::Fec => self.fec.clone().map(SourcePayload::Fec),
            SourceId::Unknown => None,
        }
    }

    /// Returns true if a payload is present for the source.
    #[must_use]
    pub const fn has(&self, source: SourceId) -> bool {
        match source {
            SourceId::Edgar => self.edgar.is_some(),
            SourceId::CompaniesHouse => self.companies_house.is_some(),
            SourceId::JapanCorporate => self.japan_corporate.is_some(),
            SourceId::Fec => self.fec.is_some(),
            SourceId::Unknown => false,
        }
    }

    /// Returns true if no source has a payload.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.edgar.is_some()
            || self.companies_house.is_some()
            || self.japan_corporate.is_some()
            || self.fec.is_some())
    }

    /// Builds a payload set from raw JSON keyed by source wire name.
    ///
    /// Sources whose JSON fails to parse are skipped and reported in the
    /// returned error list, so one malformed payload never blocks the
    /// others (partial degradation).
    #[must_use]
    pub fn from_json_map(
        raw: &serde_json::Map<String, serde_json::Value>,
    ) -> (Self, Vec<SourceAdapterError>) {
        let mut set = Self::new();
        let mut errors = Vec::new();
        for source in SourceId::all() {
            let Some(value) = raw.get(source.as_str()) else {
                continue;
            };
            match SourcePayload::from_json(source, value.clone()) {
                Ok(payload) => set.insert(payload),
                Err(err) => errors.push(err),
            }
        }
        (set, errors)
    }
}
