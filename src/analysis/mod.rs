//! Analysis modules.
//!
//! Aggregation of records into per-industry totals and ranking of those
//! totals.

pub mod aggregator;
pub mod ranker;

pub use aggregator::*;
pub use ranker::*;
