use std::path::PathBuf;

use thiserror::Error;

use crate::models::StationId;

pub type Result<T> = std::result::Result<T, CollectorError>;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Link resolution failed for station {station}: {matches} anchors matched '{marker}'")]
    LinkResolution {
        station: StationId,
        marker: String,
        matches: usize,
    },

    #[error("Fetch failed for station {station}: {message}")]
    Fetch { station: StationId, message: String },

    #[error("Extraction failed for archive {path:?}: {message}")]
    Extraction { path: PathBuf, message: String },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Data integrity error for station {station}: {message}")]
    DataIntegrity { station: StationId, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
