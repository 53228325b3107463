//! Emission aggregation.
//!
//! This module finds the most recent reporting year and sums emissions
//! per industry within a year.

use crate::error::{EmissionsError, Result};
use crate::models::{EmissionRecord, IndustryTotal};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Return the greatest year present in `records`.
pub fn latest_year(records: &[EmissionRecord]) -> Result<i32> {
    records
        .iter()
        .map(|r| r.year)
        .max()
        .ok_or(EmissionsError::EmptyDataset)
}

/// Sum emissions per industry for records in `year`.
///
/// Industries with no records in `year` are omitted. Industry names are
/// grouped by exact string equality. Output is ordered by industry name.
pub fn totals_for_year(records: &[EmissionRecord], year: i32) -> Vec<IndustryTotal> {
    let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();

    for record in records.iter().filter(|r| r.year == year) {
        *grouped.entry(record.industry.as_str()).or_default() += record.amount;
    }

    debug!("{} industries with records in {}", grouped.len(), year);

    grouped
        .into_iter()
        .map(|(industry, total)| IndustryTotal {
            industry: industry.to_string(),
            total,
        })
        .collect()
}

/// Distinct years present in `records`, ascending.
pub fn years(records: &[EmissionRecord]) -> Vec<i32> {
    records
        .iter()
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
