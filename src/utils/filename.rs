use chrono::{Datelike, Local};
use std::path::PathBuf;

use crate::models::ObservationKind;

/// Generate default export filename with format: bom-{observation}-{YYMMDD}.csv
pub fn generate_default_output_filename(observation: ObservationKind) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!(
        "bom-{}-{:02}{:02}{:02}.csv",
        observation.slug(),
        year,
        month,
        day
    );
    PathBuf::from("output").join(filename)
}
