use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::ObservationKind;

#[derive(Parser)]
#[command(name = "bom-collector")]
#[command(about = "Daily climate observation collector for BOM station archives")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect observations for every station in the catalog
    Collect {
        #[arg(
            short,
            long,
            default_value = "weather_stations.csv",
            help = "Station catalog CSV"
        )]
        stations: PathBuf,

        #[arg(
            long,
            default_value = "Site",
            help = "Catalog column holding station numbers"
        )]
        station_column: String,

        #[arg(
            short,
            long,
            default_value = "data",
            help = "Working directory for archives and extractions"
        )]
        data_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV path [default: output/bom-{observation}-{YYMMDD}.csv]"
        )]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "rainfall")]
        observation: ObservationKind,

        #[arg(long, help = "Re-download archives even when a cached copy exists")]
        force: bool,

        #[arg(long, default_value = "30", help = "Per-fetch timeout in seconds")]
        timeout_secs: u64,

        #[arg(long, help = "Keep archives and extraction directories after export")]
        keep_artifacts: bool,
    },

    /// Fetch and extract a single station's archive
    Fetch {
        #[arg(short = 'n', long, help = "Station number")]
        station: u32,

        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,

        #[arg(long, value_enum, default_value = "rainfall")]
        observation: ObservationKind,

        #[arg(long, help = "Re-download even when a cached copy exists")]
        force: bool,

        #[arg(long, default_value = "30", help = "Per-fetch timeout in seconds")]
        timeout_secs: u64,
    },

    /// Remove transient archives and extraction directories
    Clean {
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },
}
