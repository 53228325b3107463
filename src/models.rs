//! Data models for the emissions ranking.
//!
//! This module contains the loaded record type, the derived per-industry
//! totals and ranked entries, and the assembled report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single row of the emissions dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    /// Industry name, compared by exact string equality.
    pub industry: String,
    /// Reporting year.
    pub year: i32,
    /// Emissions in megatonnes of CO2-equivalent (never negative).
    #[serde(rename = "emissions_mtco2e")]
    pub amount: f64,
}

impl EmissionRecord {
    /// Creates a new record. Validation happens in the record store.
    pub fn new(industry: impl Into<String>, year: i32, amount: f64) -> Self {
        Self {
            industry: industry.into(),
            year,
            amount,
        }
    }
}

/// Sum of emissions for one industry within a selected year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryTotal {
    pub industry: String,
    pub total: f64,
}

/// An industry total with its competition rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub industry: String,
    pub total: f64,
    /// Rank starting at 1; tied totals share a rank.
    pub rank: usize,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({} MtCO2e)", self.rank, self.industry, self.total)
    }
}

/// Metadata about a generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Where the records were loaded from.
    pub source: String,
    /// Date and time the report was built.
    pub generated_at: DateTime<Utc>,
    /// Number of records in the loaded dataset.
    pub records_loaded: usize,
    /// Number of distinct industries with records in the selected year.
    pub industries_in_year: usize,
}

/// The complete emissions report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsReport {
    pub metadata: ReportMetadata,
    /// The year the report covers (the latest year unless overridden).
    pub year: i32,
    /// Whether `year` is the latest year in the dataset.
    pub is_latest_year: bool,
    /// Per-industry totals ordered by total descending, then industry name.
    pub totals: Vec<IndustryTotal>,
    /// Every industry of the year with its rank.
    pub ranked: Vec<RankedEntry>,
    /// Requested cutoff for the top list.
    pub top_n: usize,
    /// Entries with `rank <= top_n`.
    pub top: Vec<RankedEntry>,
}

impl EmissionsReport {
    /// Sum of all industry totals in the report year.
    pub fn grand_total(&self) -> f64 {
        self.totals.iter().map(|t| t.total).sum()
    }
}
