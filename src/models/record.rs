use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CollectorError, Result};
use crate::models::StationId;

/// One calendar day's observation. Interior gaps in a station's series are
/// kept as `None`; only the leading/trailing runs of missing values are
/// trimmed away during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyValue {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl DailyValue {
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

/// A single station's cleaned, date-indexed observation series.
///
/// Invariant: dates are unique and strictly increasing, and the series spans
/// exactly the station's true observation window (first to last present
/// value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station: StationId,
    rows: Vec<DailyValue>,
}

impl StationRecord {
    /// Build a record, enforcing the date-index invariant. Source files are
    /// expected to be sorted chronologically; this validates rather than
    /// trusts that.
    pub fn from_rows(station: StationId, rows: Vec<DailyValue>) -> Result<Self> {
        for pair in rows.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(CollectorError::DataIntegrity {
                    station,
                    message: format!(
                        "date index not strictly increasing: {} followed by {}",
                        pair[0].date, pair[1].date
                    ),
                });
            }
        }

        Ok(Self { station, rows })
    }

    pub fn rows(&self) -> &[DailyValue] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }
}
