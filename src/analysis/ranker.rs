//! Competition ranking of industry totals.
//!
//! Equal totals share a rank and the next distinct total skips the tied
//! positions, so totals {100, 100, 50} rank as 1, 1, 3.

use crate::models::{IndustryTotal, RankedEntry};
use std::cmp::Ordering;

/// Order totals descending and assign competition ranks.
///
/// Ties are listed by ascending industry name. That ordering does not
/// affect the rank numbers.
pub fn rank(totals: &[IndustryTotal]) -> Vec<RankedEntry> {
    let mut sorted: Vec<&IndustryTotal> = totals.iter().collect();
    sorted.sort_by(|a, b| by_total_desc(a, b));

    let mut ranked: Vec<RankedEntry> = Vec::with_capacity(sorted.len());
    for (position, total) in sorted.into_iter().enumerate() {
        // After a descending sort, `position` counts the entries seen so far;
        // all of them are strictly greater unless the previous one ties.
        let rank = match ranked.last() {
            Some(prev) if prev.total == total.total => prev.rank,
            _ => position + 1,
        };

        ranked.push(RankedEntry {
            industry: total.industry.clone(),
            total: total.total,
            rank,
        });
    }

    ranked
}

/// Keep the entries whose rank is within `n`. Ties at the boundary are all kept.
pub fn within_rank(ranked: &[RankedEntry], n: usize) -> Vec<RankedEntry> {
    ranked.iter().filter(|e| e.rank <= n).cloned().collect()
}

/// Descending by total, then ascending by industry name.
pub(crate) fn by_total_desc(a: &IndustryTotal, b: &IndustryTotal) -> Ordering {
    b.total
        .total_cmp(&a.total)
        .then_with(|| a.industry.cmp(&b.industry))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(pairs: &[(&str, f64)]) -> Vec<IndustryTotal> {
        pairs
            .iter()
            .map(|(industry, total)| IndustryTotal {
                industry: industry.to_string(),
                total: *total,
            })
            .collect()
    }

    fn summary(ranked: &[RankedEntry]) -> Vec<(&str, usize)> {
        ranked.iter().map(|e| (e.industry.as_str(), e.rank)).collect()
    }

    #[test]
    fn test_rank_distinct_totals() {
        let ranked = rank(&totals(&[("Oil", 70.0), ("Power", 80.0)]));
        assert_eq!(summary(&ranked), vec![("Power", 1), ("Oil", 2)]);
    }

    #[test]
    fn test_rank_ties_skip_positions() {
        let ranked = rank(&totals(&[("C", 50.0), ("B", 100.0), ("A", 100.0)]));
        assert_eq!(summary(&ranked), vec![("A", 1), ("B", 1), ("C", 3)]);
    }

    #[test]
    fn test_rank_is_one_plus_strictly_greater() {
        let input = totals(&[
            ("a", 5.0),
            ("b", 9.0),
            ("c", 5.0),
            ("d", 9.0),
            ("e", 9.0),
            ("f", 1.0),
            ("g", 0.0),
        ]);
        let ranked = rank(&input);

        for entry in &ranked {
            let greater = input.iter().filter(|t| t.total > entry.total).count();
            assert_eq!(entry.rank, greater + 1, "rank of {}", entry.industry);
        }
    }

    #[test]
    fn test_rank_monotonic() {
        let ranked = rank(&totals(&[
            ("x", 3.0),
            ("y", 7.5),
            ("z", 7.5),
            ("w", 0.5),
            ("v", 12.0),
        ]));

        for pair in ranked.windows(2) {
            assert!(pair[0].rank <= pair[1].rank);
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_within_rank_keeps_boundary_ties() {
        let ranked = rank(&totals(&[
            ("Power", 90.0),
            ("Oil", 80.0),
            ("Gas", 80.0),
            ("Waste", 10.0),
        ]));

        let top = within_rank(&ranked, 2);
        assert_eq!(summary(&top), vec![("Power", 1), ("Gas", 2), ("Oil", 2)]);

        assert!(within_rank(&ranked, 0).is_empty());
        assert_eq!(within_rank(&ranked, 10).len(), 4);
    }
}
