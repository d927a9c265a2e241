use std::path::Path;

use crate::error::Result;
use crate::models::Dataset;
use crate::utils::constants::{DATE_EXPORT_COLUMN, STATION_EXPORT_COLUMN};

/// Writes the assembled dataset as delimited text with the two-level key
/// (station, date) as leading columns. Missing interior values export as
/// empty fields.
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn write_dataset(&self, dataset: &Dataset, path: &Path, value_column: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)?;

        writer.write_record([STATION_EXPORT_COLUMN, DATE_EXPORT_COLUMN, value_column])?;

        for row in dataset.rows() {
            let value = row.value.map(|v| v.to_string()).unwrap_or_default();
            writer.write_record([
                row.station.to_string(),
                row.date.format("%Y-%m-%d").to_string(),
                value,
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
