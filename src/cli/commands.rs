use std::time::Duration;

use crate::archive::{ArchiveExtractor, ArchiveFetcher, WorkspaceJanitor};
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::StationId;
use crate::processors::{DatasetAssembler, StationPipeline};
use crate::readers::StationReader;
use crate::utils::filename::generate_default_output_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Collect {
            stations,
            station_column,
            data_dir,
            output,
            observation,
            force,
            timeout_secs,
            keep_artifacts,
        } => {
            let output = output.unwrap_or_else(|| generate_default_output_filename(observation));

            println!("Collecting {} data...", observation);
            println!("Station catalog: {}", stations.display());
            println!("Data directory:  {}", data_dir.display());
            println!("Output file:     {}", output.display());

            let reader = StationReader::with_column(&station_column);
            let station_list = reader.read_stations(&stations)?;

            if station_list.is_empty() {
                println!("No stations listed in catalog - nothing to do");
                return Ok(());
            }

            println!("Loaded {} stations from catalog", station_list.len());

            let pipeline = StationPipeline::new(
                observation,
                data_dir.clone(),
                Duration::from_secs(timeout_secs),
            )?
            .with_skip_existing(!force);

            let progress = ProgressReporter::for_stations(station_list.len() as u64, false);
            let (records, summary) = pipeline.run(&station_list, Some(&progress)).await;
            progress.finish_with_message(&format!("Processed {} stations", summary.processed));

            println!("\n{}", summary.report());

            let dataset = DatasetAssembler::new().assemble(records);
            println!(
                "Writing {} rows for {} stations to {}...",
                dataset.len(),
                dataset.station_count(),
                output.display()
            );

            let value_column = observation.descriptor().canonical_column;
            CsvWriter::new().write_dataset(&dataset, &output, value_column)?;

            if keep_artifacts {
                println!("Keeping archives and extraction directories");
            } else {
                let stats = WorkspaceJanitor::new().cleanup(&data_dir);
                println!(
                    "Cleaned up {} archives and {} extraction directories",
                    stats.archives_removed, stats.directories_removed
                );
                if stats.failures > 0 {
                    println!("Warning: {} cleanup operations failed", stats.failures);
                }
            }

            println!("Collection complete!");
        }

        Commands::Fetch {
            station,
            data_dir,
            observation,
            force,
            timeout_secs,
        } => {
            let station = StationId::new(station);
            println!("Fetching {} archive for station {}...", observation, station);

            let fetcher = ArchiveFetcher::new(Duration::from_secs(timeout_secs))?;
            let outcome = fetcher
                .fetch(station, observation.descriptor(), &data_dir, !force)
                .await?;

            if outcome.was_cached() {
                println!("Archive already cached: {}", outcome.path().display());
            } else {
                println!("Archive downloaded: {}", outcome.path().display());
            }

            let extracted_dir = ArchiveExtractor::new().extract(outcome.path())?;
            println!("Extracted to: {}", extracted_dir.display());
        }

        Commands::Clean { data_dir } => {
            println!("Cleaning {}...", data_dir.display());

            let stats = WorkspaceJanitor::new().cleanup(&data_dir);
            println!(
                "Removed {} archives and {} extraction directories",
                stats.archives_removed, stats.directories_removed
            );
            if stats.failures > 0 {
                println!("Warning: {} cleanup operations failed", stats.failures);
            }
        }
    }

    Ok(())
}
