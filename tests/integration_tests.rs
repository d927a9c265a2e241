use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use tempfile::TempDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use bom_collector::archive::{ArchiveFetcher, WorkspaceJanitor};
use bom_collector::models::{ObservationKind, StationId};
use bom_collector::processors::{DatasetAssembler, StationPipeline};
use bom_collector::writers::CsvWriter;

const RAINFALL_HEADER: &str = "Product code,Bureau of Meteorology station number,Year,Month,Day,Rainfall amount (millimetres),Period over which rainfall was measured (days),Quality";

/// Seed a station's archive at its deterministic cache path, as a completed
/// download from an earlier run would have left it.
fn seed_station_archive(data_dir: &Path, station: StationId, data_rows: &[&str]) -> PathBuf {
    std::fs::create_dir_all(data_dir).unwrap();
    let archive_path = ArchiveFetcher::archive_path(data_dir, station);

    let mut content = String::from(RAINFALL_HEADER);
    content.push('\n');
    for row in data_rows {
        content.push_str(row);
        content.push('\n');
    }

    let file = File::create(&archive_path).unwrap();
    let mut zip = ZipWriter::new(file);
    zip.start_file(
        format!("IDCJAC0009_{}_1800_Data.csv", station.padded()),
        FileOptions::default().compression_method(CompressionMethod::Stored),
    )
    .unwrap();
    zip.write_all(content.as_bytes()).unwrap();
    zip.finish().unwrap();

    archive_path
}

#[tokio::test]
async fn test_collect_from_cached_archives_end_to_end() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");

    let perth = StationId::new(9021);
    let albany = StationId::new(9500);

    seed_station_archive(
        &data_dir,
        perth,
        &[
            "IDCJAC0009,9021,2000,1,1,,,",
            "IDCJAC0009,9021,2000,1,2,5.0,1,Y",
            "IDCJAC0009,9021,2000,1,3,0.2,1,Y",
            "IDCJAC0009,9021,2000,1,4,,,",
        ],
    );
    seed_station_archive(
        &data_dir,
        albany,
        &[
            "IDCJAC0009,9500,1995,6,1,12.6,1,Y",
            "IDCJAC0009,9500,1995,6,2,,,",
            "IDCJAC0009,9500,1995,6,3,3.0,1,Y",
        ],
    );

    // skip_existing means the seeded archives satisfy every fetch with zero
    // network access.
    let pipeline = StationPipeline::new(
        ObservationKind::Rainfall,
        data_dir.clone(),
        Duration::from_secs(1),
    )
    .unwrap()
    .with_skip_existing(true);

    let (records, summary) = pipeline.run(&[perth, albany], None).await;

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.cache_hits, 2);
    assert_eq!(summary.downloaded, 0);
    assert!(summary.skipped.is_empty());

    // Leading/trailing gap rows trimmed, interior gap retained
    assert_eq!(records[0].len(), 2);
    assert_eq!(
        records[0].first_date(),
        NaiveDate::from_ymd_opt(2000, 1, 2)
    );
    assert_eq!(records[1].len(), 3);

    let dataset = DatasetAssembler::new().assemble(records);
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.station_count(), 2);

    let output = temp.path().join("output/rainfall.csv");
    CsvWriter::new()
        .write_dataset(&dataset, &output, "Rainfall")
        .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Station Number,Date,Rainfall");
    assert_eq!(lines[1], "9021,2000-01-02,5");
    assert_eq!(lines[3], "9500,1995-06-01,12.6");
    // Interior gap exports as an empty field
    assert_eq!(lines[4], "9500,1995-06-02,");
}

#[tokio::test]
async fn test_failing_station_is_skipped_and_run_continues() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");

    let good = StationId::new(9021);
    let bad = StationId::new(9500);

    seed_station_archive(&data_dir, good, &["IDCJAC0009,9021,2000,1,1,1.0,1,Y"]);

    // A corrupt cached archive aborts that station at the extraction step
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        ArchiveFetcher::archive_path(&data_dir, bad),
        b"not a zip archive",
    )
    .unwrap();

    let pipeline = StationPipeline::new(
        ObservationKind::Rainfall,
        data_dir,
        Duration::from_secs(1),
    )
    .unwrap()
    .with_skip_existing(true);

    let (records, summary) = pipeline.run(&[bad, good], None).await;

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].0, bad);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].station, good);

    let report = summary.report();
    assert!(report.contains("Skipped stations:"));
    assert!(report.contains("9500"));
}

#[tokio::test]
async fn test_janitor_clears_pipeline_artifacts_only() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");

    let station = StationId::new(9021);
    seed_station_archive(&data_dir, station, &["IDCJAC0009,9021,2000,1,1,1.0,1,Y"]);
    std::fs::write(data_dir.join("weather_stations.csv"), "Site\n9021\n").unwrap();

    let pipeline = StationPipeline::new(
        ObservationKind::Rainfall,
        data_dir.clone(),
        Duration::from_secs(1),
    )
    .unwrap()
    .with_skip_existing(true);

    let (records, _) = pipeline.run(&[station], None).await;
    assert_eq!(records.len(), 1);

    // Archive and extraction directory both exist before cleanup
    assert!(data_dir.join("station_9021.zip").exists());
    assert!(data_dir.join("station_9021").is_dir());

    let stats = WorkspaceJanitor::new().cleanup(&data_dir);
    assert_eq!(stats.archives_removed, 1);
    assert_eq!(stats.directories_removed, 1);
    assert_eq!(stats.failures, 0);

    assert!(!data_dir.join("station_9021.zip").exists());
    assert!(!data_dir.join("station_9021").exists());
    // The station catalog is not a transient artifact
    assert!(data_dir.join("weather_stations.csv").exists());
}

#[tokio::test]
async fn test_rerun_with_cached_archives_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");

    let station = StationId::new(9021);
    seed_station_archive(
        &data_dir,
        station,
        &[
            "IDCJAC0009,9021,2000,1,1,,,",
            "IDCJAC0009,9021,2000,1,2,5.0,1,Y",
        ],
    );

    let pipeline = StationPipeline::new(
        ObservationKind::Rainfall,
        data_dir,
        Duration::from_secs(1),
    )
    .unwrap()
    .with_skip_existing(true);

    let (first, _) = pipeline.run(&[station], None).await;
    let (second, _) = pipeline.run(&[station], None).await;

    assert_eq!(first, second);
}
