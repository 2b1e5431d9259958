//! Error types for the input boundary and reference table configuration
//!
//! The scoring functions themselves are total; only loading and validating
//! inputs can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning external records into a `FinancialProfile`
#[derive(Debug, Error)]
pub enum ProfileError {
    /// One or more required attributes are absent or empty.
    /// All missing fields of the record are reported together.
    #[error("missing field(s) for {company}: {}", fields.join(", "))]
    MissingField {
        company: String,
        fields: Vec<&'static str>,
    },

    #[error("company not found: {0}")]
    UnknownCompany(String),

    #[error("input contains no company records")]
    Empty,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while building reference tables from configuration
#[derive(Debug, Error)]
pub enum TableError {
    #[error("risk score for {name} must be between 0 and 100, got {score}")]
    ScoreOutOfRange { name: String, score: i64 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid table overrides: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_lists_every_field() {
        let err = ProfileError::MissingField {
            company: "Sample Corp".to_string(),
            fields: vec!["cash_usd", "audited_financials"],
        };
        let msg = err.to_string();
        assert!(msg.contains("Sample Corp"));
        assert!(msg.contains("cash_usd, audited_financials"));
    }

    #[test]
    fn test_score_out_of_range_message() {
        let err = TableError::ScoreOutOfRange { name: "Atlantis".to_string(), score: 140 };
        assert_eq!(
            err.to_string(),
            "risk score for Atlantis must be between 0 and 100, got 140"
        );
    }
}
