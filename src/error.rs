//! Error types for loading and querying emission records.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the record store and the analysis pipeline.
#[derive(Debug, Error)]
pub enum EmissionsError {
    /// A data row could not be turned into a valid record.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// The header row lacks a required column.
    #[error("Missing required column '{0}' in header")]
    MissingColumn(String),

    /// There are no records to aggregate.
    #[error("Dataset is empty: no emission records to aggregate")]
    EmptyDataset,

    /// An explicitly requested year has no records.
    #[error("No emission records found for year {0}")]
    YearNotFound(i32),

    #[error("Failed to open '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl EmissionsError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EmissionsError>;
