use std::path::Path;

use crate::error::{CollectorError, Result};
use crate::models::StationId;
use crate::utils::constants::DEFAULT_STATION_COLUMN;

/// Reads the external station catalog: a delimited file with one column of
/// station numbers. Consumed once at startup; order of appearance is the
/// order stations are processed in.
pub struct StationReader {
    column: String,
}

impl StationReader {
    pub fn new() -> Self {
        Self {
            column: DEFAULT_STATION_COLUMN.to_string(),
        }
    }

    pub fn with_column(column: &str) -> Self {
        Self {
            column: column.to_string(),
        }
    }

    pub fn read_stations(&self, path: &Path) -> Result<Vec<StationId>> {
        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        let column_idx = headers
            .iter()
            .position(|h| h.trim() == self.column)
            .ok_or_else(|| {
                CollectorError::Schema(format!(
                    "station column '{}' not found in catalog {:?}",
                    self.column, path
                ))
            })?;

        let mut stations = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result?;

            let field = record.get(column_idx).unwrap_or("").trim();
            if field.is_empty() {
                continue;
            }

            let station = field.parse::<StationId>().map_err(|_| {
                CollectorError::Schema(format!(
                    "invalid station number '{}' at catalog row {}",
                    field,
                    row + 2
                ))
            })?;
            stations.push(station);
        }

        Ok(stations)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
