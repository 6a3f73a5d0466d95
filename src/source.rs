//! Source identifiers and per-run source selection.
//!
//! Every entity and relationship in the graph is tagged with the registry
//! or feed it came from. Provenance is what makes a merged graph auditable:
//! a canonical entity remembers every source that contributed evidence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an originating registry or feed.
///
/// The set is closed: adapters pattern-match on the source tag instead of
/// probing payload fields, so a new registry means a new variant plus a new
/// adapter.
///
/// # Examples
///
/// ```
/// use transparency_graph::SourceId;
///
/// assert_eq!(SourceId::Edgar.as_str(), "edgar");
/// assert_eq!(SourceId::Unknown.as_str(), "unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    /// US securities filer database (SEC EDGAR full-text search).
    Edgar,
    /// UK corporate registry (Companies House).
    CompaniesHouse,
    /// Japanese corporate-number registry (houjin bangou).
    JapanCorporate,
    /// US political-contributions feed (FEC schedule A).
    Fec,
    /// Placeholder for synthesized entities with no originating record.
    Unknown,
}

impl SourceId {
    /// Stable wire name, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edgar => "edgar",
            Self::CompaniesHouse => "companies_house",
            Self::JapanCorporate => "japan_corporate",
            Self::Fec => "fec",
            Self::Unknown => "unknown",
        }
    }

    /// All real registries/feeds, in adapter invocation order.
    ///
    /// This order decides which source "wins" first-seen ties during
    /// resolution, so it must stay fixed.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Edgar,
            Self::CompaniesHouse,
            Self::JapanCorporate,
            Self::Fec,
        ]
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for SourceId {}

/// Which sources the caller actually requested for this run.
///
/// A source that is not selected is skipped silently; a source that is
/// selected but has no payload (the fetch collaborator failed or timed out)
/// is skipped with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSelection {
    /// Query the US securities filer database.
    pub edgar: bool,
    /// Query the UK corporate registry.
    pub companies_house: bool,
    /// Query the Japanese corporate-number registry.
    pub japan_corporate: bool,
    /// Query the political-contributions feed.
    pub fec: bool,
}

impl SourceSelection {
    /// Selects every source.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            edgar: true,
            companies_house: true,
            japan_corporate: true,
            fec: true,
        }
    }

    /// Selects no source.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            edgar: false,
            companies_house: false,
            japan_corporate: false,
            fec: false,
        }
    }

    /// Selects a single source.
    ///
    /// `SourceId::Unknown` is never selectable; it exists only for
    /// synthesized placeholder entities, so `only(SourceId::Unknown)`
    /// selects nothing.
    #[must_use]
    pub fn only(source: SourceId) -> Self {
        let mut selection = Self::none();
        match source {
            SourceId::Edgar => selection.edgar = true,
            SourceId::CompaniesHouse => selection.companies_house = true,
            SourceId::JapanCorporate => selection.japan_corporate = true,
            SourceId::Fec => selection.fec = true,
            SourceId::Unknown => {}
        }
        selection
    }

    /// Returns true if the given source is selected.
    #[must_use]
    pub const fn contains(self, source: SourceId) -> bool {
        match source {
            SourceId::Edgar => self.edgar,
            SourceId::CompaniesHouse => self.companies_house,
            SourceId::JapanCorporate => self.japan_corporate,
            SourceId::Fec => self.fec,
            SourceId::Unknown => false,
        }
    }

    /// Returns true if no source is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.edgar || self.companies_house || self.japan_corporate || self.fec)
    }
}

impl Default for SourceSelection {
    fn default() -> Self {
        Self::all()
    }
}
