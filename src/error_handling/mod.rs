//! Error types for the analysis pipeline.
//!
//! The pipeline distinguishes three failure classes:
//! - invalid input, rejected before any network call;
//! - a source being unavailable, which is never surfaced as an error -- it
//!   degrades to absent fields in the report;
//! - unexpected internal failures.
//!
//! Only the first and last are represented here; source unavailability is
//! modeled as `Option`/default values returned by the provider clients.

use log::SetLoggerError;
use thiserror::Error;

/// User-visible failures of a single analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The target was neither a valid IP address nor a plausible hostname,
    /// or it matched the injection denylist.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// An unexpected internal failure (not a provider outage).
    #[error("analysis failed: {0}")]
    Internal(String),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_target_display() {
        let err = AnalysisError::InvalidTarget("injection pattern detected".into());
        assert_eq!(
            err.to_string(),
            "invalid target: injection pattern detected"
        );
    }

    #[test]
    fn test_internal_display() {
        let err = AnalysisError::Internal("reference table corrupted".into());
        assert_eq!(err.to_string(), "analysis failed: reference table corrupted");
    }

    #[test]
    fn test_error_classes_are_distinct() {
        let input = AnalysisError::InvalidTarget("x".into());
        let internal = AnalysisError::Internal("x".into());
        assert!(matches!(input, AnalysisError::InvalidTarget(_)));
        assert!(matches!(internal, AnalysisError::Internal(_)));
    }
}
