use crate::models::{Dataset, DatasetRow, StationRecord};

/// Merges per-station records into one table keyed by (station, date).
/// Station order and each record's internal row order are preserved; no
/// deduplication, interpolation, or cross-station date alignment happens
/// here.
pub struct DatasetAssembler;

impl DatasetAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(&self, records: Vec<StationRecord>) -> Dataset {
        let capacity = records.iter().map(|r| r.len()).sum();
        let mut rows = Vec::with_capacity(capacity);

        for record in records {
            let station = record.station;
            for daily in record.rows() {
                rows.push(DatasetRow {
                    station,
                    date: daily.date,
                    value: daily.value,
                });
            }
        }

        Dataset::new(rows)
    }
}

impl Default for DatasetAssembler {
    fn default() -> Self {
        Self::new()
    }
}
