//! Error types for transparency-graph.
//!
//! All errors are strongly typed using thiserror. Per-record and per-source
//! problems are recovered locally (skip and warn) so one bad registry never
//! aborts the whole analysis; only a run that produces no usable graph at
//! all is terminal.

use thiserror::Error;

use crate::source::SourceId;

/// One source's payload was malformed.
///
/// The pipeline catches this, skips the source, and continues with the
/// others; the skipped source is named in the report warnings.
#[derive(Debug, Clone, Error)]
#[error("source '{source}' produced a malformed payload: {reason}")]
pub struct SourceAdapterError {
    /// The source whose payload could not be adapted.
    pub source: SourceId,
    /// Human-readable cause.
    pub reason: String,
}

impl SourceAdapterError {
    /// Creates an adapter error for the given source.
    #[must_use]
    pub fn new(source: SourceId, reason: impl Into<String>) -> Self {
        Self {
            source,
            reason: reason.into(),
        }
    }
}

/// An entity record whose name is blank after normalization.
///
/// Such records carry no identity; the resolver drops them with a warning
/// rather than merging them into a null-key bucket.
#[derive(Debug, Clone, Error)]
#[error("entity from source '{source}' has a blank name after normalization: {name:?}")]
pub struct InvalidEntityError {
    /// The offending display name.
    pub name: String,
    /// The source that produced the record.
    pub source: SourceId,
}

/// Top-level error type for an analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A source payload was malformed.
    ///
    /// Surfaced only when the caller adapts a single payload directly; the
    /// pipeline recovers from this per source.
    #[error(transparent)]
    Adapter(#[from] SourceAdapterError),

    /// An entity record was invalid.
    #[error(transparent)]
    InvalidEntity(#[from] InvalidEntityError),

    /// No requested source produced any entities; an empty graph has no
    /// analytic value.
    #[error("no usable sources: {detail}")]
    NoUsableSources {
        /// Explanation listing what was requested and what failed.
        detail: String,
    },
}

impl AnalysisError {
    /// Creates a terminal empty-run error.
    #[must_use]
    pub fn no_usable_sources(detail: impl Into<String>) -> Self {
        Self::NoUsableSources {
            detail: detail.into(),
        }
    }

    /// Returns true if this is a per-source adapter error.
    #[must_use]
    pub const fn is_adapter(&self) -> bool {
        matches!(self, Self::Adapter(_))
    }

    /// Returns true if this error is terminal for the whole run.
    ///
    /// Adapter and record errors are recoverable (skip and warn); only an
    /// entirely empty run is not.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::NoUsableSources { .. })
    }
}

/// Result type alias for analysis operations.
pub type GraphResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_error_names_source() {
        let err = SourceAdapterError::new(SourceId::CompaniesHouse, "officers is not an array");
        let msg = format!("{err}");
        assert!(msg.contains("companies_house"));
        assert!(msg.contains("officers is not an array"));
    }

    #[test]
    fn test_invalid_entity_error_message() {
        let err = InvalidEntityError {
            name: "   ".to_string(),
            source: SourceId::Edgar,
        };
        let msg = format!("{err}");
        assert!(msg.contains("edgar"));
        assert!(msg.contains("blank name"));
    }

    #[test]
    fn test_analysis_error_from_adapter() {
        let err: AnalysisError =
            SourceAdapterError::new(SourceId::Fec, "missing contributions").into();
        assert!(err.is_adapter());
        assert!(!err.is_terminal());
    }

    #[test]
    fn test_no_usable_sources_is_terminal() {
        let err = AnalysisError::no_usable_sources("all 3 requested sources failed");
        assert!(err.is_terminal());
        assert!(format!("{err}").contains("all 3 requested sources failed"));
    }
}
