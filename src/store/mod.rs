//! Record store for loading emission records from CSV.
//!
//! This module reads a tabular source with a header row, validates every
//! row, and keeps the resulting records as an immutable in-memory sequence.
//! A single bad row fails the whole load.

use crate::error::{EmissionsError, Result};
use crate::models::EmissionRecord;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Header name of the industry column.
pub const INDUSTRY_COLUMN: &str = "industry";
/// Header name of the year column.
pub const YEAR_COLUMN: &str = "year";
/// Header name of the emissions column.
pub const AMOUNT_COLUMN: &str = "emissions_mtco2e";

/// Read-only collection of validated emission records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<EmissionRecord>,
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    industry: usize,
    year: usize,
    amount: usize,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| EmissionsError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            industry: find(INDUSTRY_COLUMN)?,
            year: find(YEAR_COLUMN)?,
            amount: find(AMOUNT_COLUMN)?,
        })
    }
}

impl RecordStore {
    /// Load records from a CSV file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading emission records from {}", path.display());

        let file = File::open(path).map_err(|source| EmissionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_reader(file)?;
        info!("Loaded {} records", store.len());
        Ok(store)
    }

    /// Load records from any CSV reader. The first row must be the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let layout = ColumnLayout::from_headers(csv_reader.headers()?)?;
        debug!("Column layout: {:?}", layout);

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            records.push(parse_row(&row, layout, line)?);
        }

        Ok(Self { records })
    }

    /// Wrap already-built records, applying the same validation as loading.
    ///
    /// Line numbers in errors are 1-based positions in `records`.
    pub fn from_records(records: Vec<EmissionRecord>) -> Result<Self> {
        for (idx, record) in records.iter().enumerate() {
            let line = idx as u64 + 1;
            if record.industry.trim().is_empty() {
                return Err(EmissionsError::malformed(line, "missing field 'industry'"));
            }
            validate_amount(record.amount, line)?;
        }

        Ok(Self { records })
    }

    /// All loaded records in source order.
    pub fn records(&self) -> &[EmissionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmissionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a EmissionRecord;
    type IntoIter = std::slice::Iter<'a, EmissionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Turn one CSV row into a validated record.
fn parse_row(row: &StringRecord, layout: ColumnLayout, line: u64) -> Result<EmissionRecord> {
    // Industry is the grouping key and is kept verbatim.
    let industry = required_field(row, layout.industry, INDUSTRY_COLUMN, line)?.to_string();

    let raw_year = required_field(row, layout.year, YEAR_COLUMN, line)?.trim();
    let year: i32 = raw_year.parse().map_err(|_| {
        EmissionsError::malformed(line, format!("non-numeric year '{}'", raw_year))
    })?;

    let raw_amount = required_field(row, layout.amount, AMOUNT_COLUMN, line)?.trim();
    let amount: f64 = raw_amount.parse().map_err(|_| {
        EmissionsError::malformed(line, format!("non-numeric amount '{}'", raw_amount))
    })?;
    validate_amount(amount, line)?;

    Ok(EmissionRecord {
        industry,
        year,
        amount,
    })
}

/// A cell that is present and not blank.
fn required_field<'r>(
    row: &'r StringRecord,
    idx: usize,
    name: &str,
    line: u64,
) -> Result<&'r str> {
    match row.get(idx) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EmissionsError::malformed(
            line,
            format!("missing field '{}'", name),
        )),
    }
}

fn validate_amount(amount: f64, line: u64) -> Result<()> {
    if !amount.is_finite() {
        return Err(EmissionsError::malformed(
            line,
            format!("non-finite amount {}", amount),
        ));
    }
    if amount < 0.0 {
        return Err(EmissionsError::malformed(
            line,
            format!("negative amount {}", amount),
        ));
    }
    Ok(())
}
