use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::StationId;

/// One row of the merged table, keyed by (station, date).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub station: StationId,
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// The union of all stations' cleaned records, in the order stations were
/// processed. Rows are never re-sorted and no cross-station date alignment is
/// performed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
}

impl Dataset {
    pub fn new(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn station_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.station)
            .collect::<HashSet<_>>()
            .len()
    }
}
