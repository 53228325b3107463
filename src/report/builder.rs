//! Report assembly.
//!
//! Chains the aggregation and ranking steps: select the year, total each
//! industry, rank, and keep every entry whose rank falls within the cutoff.

use crate::analysis::ranker::by_total_desc;
use crate::analysis::{latest_year, rank, totals_for_year, within_rank};
use crate::error::{EmissionsError, Result};
use crate::models::{EmissionRecord, EmissionsReport, RankedEntry, ReportMetadata};
use crate::store::RecordStore;
use chrono::Utc;
use tracing::{debug, info};

/// Default cutoff for the top list.
pub const DEFAULT_TOP_N: usize = 5;

/// Ranked entries of the latest year with `rank <= n`.
///
/// More than `n` entries are returned when totals tie across the cutoff.
pub fn top_n(records: &[EmissionRecord], n: usize) -> Result<Vec<RankedEntry>> {
    let year = latest_year(records)?;
    Ok(top_n_for_year(records, year, n))
}

/// Ranked entries of `year` with `rank <= n`.
pub fn top_n_for_year(records: &[EmissionRecord], year: i32, n: usize) -> Vec<RankedEntry> {
    let totals = totals_for_year(records, year);
    let ranked = rank(&totals);
    within_rank(&ranked, n)
}

/// Build the full report for `year`, or for the latest year when `None`.
pub fn build_report(
    store: &RecordStore,
    source: &str,
    n: usize,
    year: Option<i32>,
) -> Result<EmissionsReport> {
    let records = store.records();
    let latest = latest_year(records)?;

    let year = match year {
        Some(y) if !records.iter().any(|r| r.year == y) => {
            return Err(EmissionsError::YearNotFound(y));
        }
        Some(y) => y,
        None => latest,
    };
    info!("Building top {} report for {}", n, year);

    let mut totals = totals_for_year(records, year);
    let ranked = rank(&totals);
    let top = within_rank(&ranked, n);
    totals.sort_by(by_total_desc);

    debug!(
        "{} industries ranked, {} within top {}",
        ranked.len(),
        top.len(),
        n
    );

    Ok(EmissionsReport {
        metadata: ReportMetadata {
            source: source.to_string(),
            generated_at: Utc::now(),
            records_loaded: store.len(),
            industries_in_year: totals.len(),
        },
        year,
        is_latest_year: year == latest,
        totals,
        ranked,
        top_n: n,
        top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../fixtures/emissions.csv");

    fn fixture_store() -> RecordStore {
        RecordStore::from_reader(FIXTURE.as_bytes()).unwrap()
    }

    fn sample_records() -> Vec<EmissionRecord> {
        vec![
            EmissionRecord::new("Power", 2022, 50.0),
            EmissionRecord::new("Power", 2023, 80.0),
            EmissionRecord::new("Oil", 2023, 70.0),
            EmissionRecord::new("Oil", 2022, 60.0),
        ]
    }

    #[test]
    fn test_top_n_sample() {
        let top = top_n(&sample_records(), 5).unwrap();

        assert_eq!(
            top,
            vec![
                RankedEntry {
                    industry: "Power".to_string(),
                    total: 80.0,
                    rank: 1
                },
                RankedEntry {
                    industry: "Oil".to_string(),
                    total: 70.0,
                    rank: 2
                },
            ]
        );
    }

    #[test]
    fn test_top_n_idempotent() {
        let records = fixture_store();
        let first = top_n(records.records(), 5).unwrap();
        let second = top_n(records.records(), 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_n_empty() {
        assert!(matches!(top_n(&[], 5), Err(EmissionsError::EmptyDataset)));
    }

    #[test]
    fn test_top_n_zero() {
        assert!(top_n(&sample_records(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_top_n_includes_boundary_ties() {
        let store = fixture_store();
        let top = top_n(store.records(), 5).unwrap();

        let names: Vec<_> = top.iter().map(|e| (e.industry.as_str(), e.rank)).collect();
        assert_eq!(
            names,
            vec![
                ("Power", 1),
                ("Transportation", 2),
                ("Manufacturing", 3),
                ("Agriculture", 4),
                ("Buildings", 5),
                ("Oil & Gas", 5),
            ]
        );
    }

    #[test]
    fn test_top_n_for_earlier_year() {
        let top = top_n_for_year(&sample_records(), 2022, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].industry, "Oil");
    }

    #[test]
    fn test_build_report_latest_year() {
        let store = fixture_store();
        let report = build_report(&store, "fixture", DEFAULT_TOP_N, None).unwrap();

        assert_eq!(report.year, 2023);
        assert!(report.is_latest_year);
        assert_eq!(report.metadata.records_loaded, store.len());
        // Mining has no 2023 records.
        assert_eq!(report.metadata.industries_in_year, 7);
        assert!(report.totals.iter().all(|t| t.industry != "Mining"));
        assert_eq!(report.ranked.len(), 7);
        assert_eq!(report.top.len(), 6);
        assert_eq!(report.totals[0].industry, "Power");
        assert_eq!(report.totals[0].total, 1500.5);
        assert_eq!(report.grand_total(), 5170.75);

        for pair in report.totals.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_build_report_explicit_year() {
        let store = fixture_store();
        let report = build_report(&store, "fixture", 3, Some(2022)).unwrap();

        assert_eq!(report.year, 2022);
        assert!(!report.is_latest_year);
        assert!(report.totals.iter().any(|t| t.industry == "Mining"));
        assert_eq!(report.top.len(), 3);
    }

    #[test]
    fn test_build_report_unknown_year() {
        let err = build_report(&fixture_store(), "fixture", 5, Some(1990)).unwrap_err();
        assert!(matches!(err, EmissionsError::YearNotFound(1990)));
    }

    #[test]
    fn test_build_report_empty_store() {
        let err = build_report(&RecordStore::default(), "empty", 5, None).unwrap_err();
        assert!(matches!(err, EmissionsError::EmptyDataset));
    }
}
