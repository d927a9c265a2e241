use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The observation series being collected. Each run handles one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ObservationKind {
    Rainfall,
    MaxTemperature,
}

/// Variant configuration selecting one observation series on the bureau's
/// catalog: the `p_nccObsCode` query parameter, the `title` attribute of the
/// download anchor, and the data file's value column with its canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationDescriptor {
    pub obs_code: &'static str,
    pub link_marker: &'static str,
    pub source_column: &'static str,
    pub canonical_column: &'static str,
}

const RAINFALL: ObservationDescriptor = ObservationDescriptor {
    obs_code: "136",
    link_marker: "Data file for daily rainfall data for all years",
    source_column: "Rainfall amount (millimetres)",
    canonical_column: "Rainfall",
};

const MAX_TEMPERATURE: ObservationDescriptor = ObservationDescriptor {
    obs_code: "122",
    link_marker: "Data file for daily maximum temperature data for all years",
    source_column: "Maximum temperature (Degree C)",
    canonical_column: "MaxTemperature",
};

impl ObservationKind {
    pub fn descriptor(&self) -> &'static ObservationDescriptor {
        match self {
            ObservationKind::Rainfall => &RAINFALL,
            ObservationKind::MaxTemperature => &MAX_TEMPERATURE,
        }
    }

    /// Filename-safe form used in default output names.
    pub fn slug(&self) -> &'static str {
        match self {
            ObservationKind::Rainfall => "rainfall",
            ObservationKind::MaxTemperature => "max-temperature",
        }
    }
}

impl fmt::Display for ObservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationKind::Rainfall => write!(f, "daily rainfall"),
            ObservationKind::MaxTemperature => write!(f, "daily maximum temperature"),
        }
    }
}
