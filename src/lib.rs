//! emrank - rank the highest emitting industries of a dataset.
//!
//! Records of `(industry, year, emissions_mtco2e)` are loaded once into a
//! [`RecordStore`]. Every query is a pure function over the loaded slice:
//!
//! - [`latest_year`] finds the most recent reporting year,
//! - [`totals_for_year`] sums emissions per industry for one year,
//! - [`rank`] assigns competition ranks (`RANK()` semantics),
//! - [`top_n`] chains the three and keeps entries with `rank <= n`.

pub mod analysis;
pub mod error;
pub mod models;
pub mod report;
pub mod store;

pub use analysis::{latest_year, rank, totals_for_year, years};
pub use error::{EmissionsError, Result};
pub use models::{EmissionRecord, EmissionsReport, IndustryTotal, RankedEntry, ReportMetadata};
pub use report::{build_report, top_n, top_n_for_year, DEFAULT_TOP_N};
pub use store::RecordStore;
