//! End-to-end analysis orchestration.
//!
//! One call: requested sources in, report out. Adapters run independently
//! per source with skip-and-warn recovery, then resolution, relationship
//! merging, and aggregation run over the complete record set. The core is
//! a pure synchronous transformation of already-fetched payloads; fetching
//! and retries belong to the surrounding collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::adapters;
use crate::error::GraphResult;
use crate::graph::{Graph, GraphBuilder};
use crate::normalize::name_variants;
use crate::payload::{FecPayload, PayloadSet};
use crate::source::{SourceId, SourceSelection};

/// Input for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The organization under analysis.
    pub company: String,

    /// Optional officer of interest; their name variants are included in
    /// the analysis annotations.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub officer: Option<String>,

    /// Which sources this run should consume.
    #[serde(default)]
    pub sources: SourceSelection,

    /// Already-fetched payloads, at most one per source.
    #[serde(default)]
    pub payloads: PayloadSet,
}

impl AnalysisRequest {
    /// Creates a request for all sources.
    #[must_use]
    pub fn new(company: impl Into<String>, payloads: PayloadSet) -> Self {
        Self {
            company: company.into(),
            officer: None,
            sources: SourceSelection::all(),
            payloads,
        }
    }

    /// Restricts the run to the given source selection.
    #[must_use]
    pub fn with_sources(mut self, sources: SourceSelection) -> Self {
        self.sources = sources;
        self
    }

    /// Adds an officer of interest.
    #[must_use]
    pub fn with_officer(mut self, officer: impl Into<String>) -> Self {
        self.officer = Some(officer.into());
        self
    }
}

/// The full analysis report: the graph artifact wrapped with provenance
/// metadata about the run that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The organization the analysis was run for.
    pub company_name: String,

    /// When the report was assembled.
    pub analysis_date: DateTime<Utc>,

    /// Which sources actually contributed records to this run.
    pub data_sources: SourceSelection,

    /// Requested sources that were skipped (missing or malformed payload).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped_sources: Vec<SourceId>,

    /// Warnings raised while building the graph.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,

    /// The graph artifact: entities, relationships, analysis, summary.
    #[serde(flatten)]
    pub graph: Graph,
}

/// Runs the full pipeline for one request.
///
/// Partial results are always preferable to no results: a malformed or
/// missing payload skips only its own source, and the report names every
/// skipped source. Only a run in which no source yields a single valid
/// entity fails.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::NoUsableSources`] when no requested
/// source produced any usable records.
pub fn run_analysis(request: &AnalysisRequest) -> GraphResult<AnalysisReport> {
    let mut builder = GraphBuilder::new();
    let mut used = SourceSelection::none();
    let mut skipped = Vec::new();

    for source in SourceId::all() {
        if !request.sources.contains(source) {
            continue;
        }
        let Some(payload) = request.payloads.get(source) else {
            warn!(source = %source, "requested source has no payload, skipping");
            builder.warn(format!("source '{source}' skipped: no payload available"));
            skipped.push(source);
            continue;
        };
        match adapters::extract(&payload) {
            Ok(records) => {
                info!(
                    source = %source,
                    entities = records.entities.len(),
                    relationships = records.relationships.len(),
                    "adapted source payload"
                );
                builder.add_records(records);
                mark_used(&mut used, source);
            }
            Err(err) => {
                warn!(source = %source, error = %err, "skipping malformed source payload");
                builder.warn(format!("source '{source}' skipped: {err}"));
                skipped.push(source);
            }
        }
    }

    if builder.is_empty() {
        let skipped_names: Vec<&str> = skipped.iter().map(|s| s.as_str()).collect();
        return Err(crate::error::AnalysisError::no_usable_sources(format!(
            "no requested source produced records for '{}' (skipped: [{}])",
            request.company,
            skipped_names.join(", ")
        )));
    }

    // Contribution rollup comes straight from the feed payload; it is
    // per-recipient money, not graph structure.
    let contribution_totals = used
        .fec
        .then(|| request.payloads.fec.as_ref().map(FecPayload::recipient_totals))
        .flatten()
        .filter(|totals| !totals.is_empty());

    let mut built = builder.build()?;

    let mut variants = name_variants(&request.company);
    if let Some(officer) = request.officer.as_deref() {
        variants.extend(name_variants(officer));
        variants.sort();
        variants.dedup();
    }
    built.graph.analysis.name_variants = variants;
    built.graph.analysis.contribution_totals = contribution_totals;

    Ok(AnalysisReport {
        company_name: request.company.clone(),
        analysis_date: Utc::now(),
        data_sources: used,
        skipped_sources: skipped,
        warnings: built.warnings,
        graph: built.graph,
    })
}

fn mark_used(used: &mut SourceSelection, source: SourceId) {
    match source {
        SourceId::Edgar => used.edgar = true,
        SourceId::CompaniesHouse => used.companies_house = true,
        SourceId::JapanCorporate => used.japan_corporate = true,
        SourceId::Fec => used.fec = true,
        SourceId::Unknown => {}
    }
}
