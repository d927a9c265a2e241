use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::archive::{ArchiveExtractor, ArchiveFetcher, FetchOutcome};
use crate::error::Result;
use crate::models::{ObservationKind, StationId, StationRecord};
use crate::processors::RecordNormalizer;
use crate::utils::progress::ProgressReporter;

/// Outcome counts for one collection run, including the stations that were
/// skipped and why. Nothing is silently swallowed: every skip is logged when
/// it happens and reprinted in the final report.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub processed: usize,
    pub downloaded: usize,
    pub cache_hits: usize,
    pub skipped: Vec<(StationId, String)>,
}

impl RunSummary {
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("Collection Run Summary\n");
        out.push_str("======================\n");
        out.push_str(&format!("Stations processed:  {}\n", self.processed));
        out.push_str(&format!("Archives downloaded: {}\n", self.downloaded));
        out.push_str(&format!("Cache hits:          {}\n", self.cache_hits));
        out.push_str(&format!("Stations skipped:    {}\n", self.skipped.len()));

        if !self.skipped.is_empty() {
            out.push_str("\nSkipped stations:\n");
            for (station, reason) in &self.skipped {
                out.push_str(&format!("  {} - {}\n", station, reason));
            }
        }

        out
    }
}

/// Sequential per-station driver: fetch, extract, normalize, accumulate.
/// A failure aborts only the station that produced it; the run continues
/// with the remaining stations.
pub struct StationPipeline {
    fetcher: ArchiveFetcher,
    extractor: ArchiveExtractor,
    normalizer: RecordNormalizer,
    observation: ObservationKind,
    data_dir: PathBuf,
    skip_existing: bool,
}

impl StationPipeline {
    pub fn new(observation: ObservationKind, data_dir: PathBuf, timeout: Duration) -> Result<Self> {
        Ok(Self {
            fetcher: ArchiveFetcher::new(timeout)?,
            extractor: ArchiveExtractor::new(),
            normalizer: RecordNormalizer::new(observation.descriptor()),
            observation,
            data_dir,
            skip_existing: true,
        })
    }

    pub fn with_skip_existing(mut self, skip_existing: bool) -> Self {
        self.skip_existing = skip_existing;
        self
    }

    pub async fn run(
        &self,
        stations: &[StationId],
        progress: Option<&ProgressReporter>,
    ) -> (Vec<StationRecord>, RunSummary) {
        let mut records = Vec::with_capacity(stations.len());
        let mut summary = RunSummary::default();

        for &station in stations {
            if let Some(progress) = progress {
                progress.set_message(&format!("Station {}", station));
            }

            match self.process_station(station).await {
                Ok((record, outcome)) => {
                    if outcome.was_cached() {
                        summary.cache_hits += 1;
                    } else {
                        summary.downloaded += 1;
                    }
                    summary.processed += 1;
                    info!(
                        station = %station,
                        rows = record.len(),
                        cached = outcome.was_cached(),
                        "station processed"
                    );
                    records.push(record);
                }
                Err(e) => {
                    warn!(station = %station, error = %e, "skipping station");
                    summary.skipped.push((station, e.to_string()));
                }
            }

            if let Some(progress) = progress {
                progress.increment();
            }
        }

        (records, summary)
    }

    async fn process_station(&self, station: StationId) -> Result<(StationRecord, FetchOutcome)> {
        let outcome = self
            .fetcher
            .fetch(
                station,
                self.observation.descriptor(),
                &self.data_dir,
                self.skip_existing,
            )
            .await?;

        let extracted_dir = self.extractor.extract(outcome.path())?;
        let record = self.normalizer.normalize(&extracted_dir, station)?;

        Ok((record, outcome))
    }
}
