use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{CollectorError, Result};
use crate::models::{DailyValue, ObservationDescriptor, StationId, StationRecord};
use crate::utils::constants::{
    DATA_FILE_EXTENSION, DAY_COLUMN, MONTH_COLUMN, PRODUCT_CODE_COLUMN, STATION_NUMBER_COLUMN,
    YEAR_COLUMN,
};

/// The bureau-specific headers the normalizer resolves, and the canonical
/// name the observation column is renamed to. The product code and station
/// number columns must be present but are dropped: the record is grouped
/// under its owning station, so they are redundant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub source_value_column: String,
    pub canonical_value_column: String,
}

impl ColumnMap {
    pub fn for_observation(descriptor: &ObservationDescriptor) -> Self {
        Self {
            source_value_column: descriptor.source_column.to_string(),
            canonical_value_column: descriptor.canonical_column.to_string(),
        }
    }
}

/// Parses the extracted data file into a clean, gap-trimmed, date-indexed
/// record for one station.
pub struct RecordNormalizer {
    columns: ColumnMap,
}

impl RecordNormalizer {
    pub fn new(descriptor: &ObservationDescriptor) -> Self {
        Self {
            columns: ColumnMap::for_observation(descriptor),
        }
    }

    pub fn with_columns(columns: ColumnMap) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn normalize(&self, extracted_dir: &Path, station: StationId) -> Result<StationRecord> {
        let data_file = locate_data_file(extracted_dir)?;
        let rows = self.read_rows(&data_file, station)?;
        let trimmed = trim_missing_edges(rows);

        StationRecord::from_rows(station, trimmed)
    }

    fn read_rows(&self, path: &Path, station: StationId) -> Result<Vec<DailyValue>> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        // The identifying columns are required even though they are dropped:
        // their absence means the bureau changed the file layout.
        column_index(&headers, PRODUCT_CODE_COLUMN)?;
        column_index(&headers, STATION_NUMBER_COLUMN)?;
        let year_idx = column_index(&headers, YEAR_COLUMN)?;
        let month_idx = column_index(&headers, MONTH_COLUMN)?;
        let day_idx = column_index(&headers, DAY_COLUMN)?;
        let value_idx = column_index(&headers, &self.columns.source_value_column)?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;

            let date = rebuild_date(
                record.get(year_idx).unwrap_or(""),
                record.get(month_idx).unwrap_or(""),
                record.get(day_idx).unwrap_or(""),
            )
            .ok_or_else(|| CollectorError::DataIntegrity {
                station,
                message: format!(
                    "unparseable date fields '{}-{}-{}'",
                    record.get(year_idx).unwrap_or(""),
                    record.get(month_idx).unwrap_or(""),
                    record.get(day_idx).unwrap_or("")
                ),
            })?;

            let value = parse_value(record.get(value_idx).unwrap_or(""), station)?;
            rows.push(DailyValue::new(date, value));
        }

        Ok(rows)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| CollectorError::Schema(format!("required column '{}' not found", name)))
}

/// Locate the single data file inside the extracted directory.
fn locate_data_file(extracted_dir: &Path) -> Result<PathBuf> {
    let mut matches: Vec<PathBuf> = std::fs::read_dir(extracted_dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(DATA_FILE_EXTENSION))
        })
        .collect();
    matches.sort();

    if matches.len() != 1 {
        return Err(CollectorError::Schema(format!(
            "expected exactly one .{} data file in {:?}, found {}",
            DATA_FILE_EXTENSION,
            extracted_dir,
            matches.len()
        )));
    }

    Ok(matches.remove(0))
}

/// Rebuild a calendar date from the year field verbatim and two-digit
/// zero-padded month and day fields.
fn rebuild_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let composed = format!(
        "{}-{:0>2}-{:0>2}",
        year.trim(),
        month.trim(),
        day.trim()
    );
    NaiveDate::parse_from_str(&composed, "%Y-%m-%d").ok()
}

/// An empty field is a missing observation, never an error.
fn parse_value(raw: &str, station: StationId) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| CollectorError::DataIntegrity {
            station,
            message: format!("unparseable observation value '{}'", raw),
        })
}

/// Discard rows strictly outside [first present value, last present value].
/// Source files pad a fixed historical window with missing-value rows at both
/// edges; interior gaps are retained.
fn trim_missing_edges(rows: Vec<DailyValue>) -> Vec<DailyValue> {
    let first = rows.iter().position(|r| r.value.is_some());
    let last = rows.iter().rposition(|r| r.value.is_some());

    match (first, last) {
        (Some(first), Some(last)) => rows[first..=last].to_vec(),
        _ => Vec::new(),
    }
}
