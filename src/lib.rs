//! # transparency-graph
//!
//! Entity resolution and relationship-graph assembly for corporate
//! transparency analysis. The crate takes already-fetched records from
//! heterogeneous registries (SEC EDGAR, Companies House, the Japanese
//! corporate-number registry, and an optional political-contributions
//! feed) and produces one deduplicated, edge-closed entity-relationship
//! graph for a single queried organization, plus the ranked aggregates the
//! visualization layer renders.
//!
//! ## Core Concepts
//!
//! - **Entity**: a real-world actor (company, officer, committee, address)
//!   as reported by one source
//! - **Canonical key**: the normalized name that decides identity; records
//!   that normalize alike merge into one canonical entity
//! - **Relationship**: a directed, typed edge between entities, rewritten
//!   to canonical endpoints and deduplicated
//! - **Report**: the graph artifact wrapped with provenance metadata about
//!   which sources contributed and which were skipped
//!
//! ## Usage
//!
//! ```
//! use transparency_graph::{run_analysis, AnalysisRequest, PayloadSet};
//! use transparency_graph::payload::EdgarPayload;
//!
//! let mut payloads = PayloadSet::new();
//! payloads.edgar = Some(EdgarPayload {
//!     company_name: "Acme Inc.".to_string(),
//!     cik: Some("0000320193".to_string()),
//!     filings: vec![],
//! });
//!
//! let report = run_analysis(&AnalysisRequest::new("Acme Inc.", payloads))?;
//! assert_eq!(report.graph.summary.total_entities, 1);
//! # Ok::<(), transparency_graph::AnalysisError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod aggregate;
pub mod entity;
pub mod error;
pub mod graph;
pub mod merger;
pub mod normalize;
pub mod payload;
pub mod pipeline;
pub mod relationship;
pub mod resolver;
pub mod source;

// Re-export primary types at crate root for convenience
pub use adapters::SourceRecords;
pub use aggregate::{Analysis, Distribution, Summary};
pub use entity::{CanonicalEntity, Entity, EntityKind};
pub use error::{AnalysisError, GraphResult, InvalidEntityError, SourceAdapterError};
pub use graph::{BuiltGraph, Graph, GraphBuilder};
pub use merger::{merge_relationships, MergeOutcome};
pub use payload::{PayloadSet, SourcePayload};
pub use pipeline::{run_analysis, AnalysisReport, AnalysisRequest};
pub use relationship::{Relationship, RelationshipKind};
pub use resolver::{resolve, CanonicalTable, Resolution};
pub use source::{SourceId, SourceSelection};
