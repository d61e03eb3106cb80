use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::tray::{Dimension, Format};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum EnumerableLevelFilter {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<EnumerableLevelFilter> for LevelFilter {
    fn from(value: EnumerableLevelFilter) -> Self {
        match value {
            EnumerableLevelFilter::Off => LevelFilter::Off,
            EnumerableLevelFilter::Error => LevelFilter::Error,
            EnumerableLevelFilter::Warn => LevelFilter::Warn,
            EnumerableLevelFilter::Info => LevelFilter::Info,
            EnumerableLevelFilter::Debug => LevelFilter::Debug,
            EnumerableLevelFilter::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Traygen: generate random block lists for 2D tray packing instances.
pub struct CliArgs {
    /// Tray size.
    #[arg(short, long = "tray_size", value_name = "WIDTH,HEIGHT")]
    pub tray_size: Dimension,
    /// Minimum block size.
    #[arg(short, long = "min_block_size", value_name = "WIDTH,HEIGHT")]
    pub min_block_size: Dimension,
    /// Maximum block size.
    #[arg(short = 'M', long = "max_block_size", value_name = "WIDTH,HEIGHT")]
    pub max_block_size: Dimension,
    /// Number of blocks per tray, if omitted - fill entire area.
    #[arg(short, long = "num_blocks", value_name = "N")]
    pub num_blocks: Option<usize>,
    /// Number of samples to generate (not implemented yet, ignored).
    #[arg(
        short = 's',
        long = "num_samples",
        value_name = "N",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub num_samples: i64,
    /// Enable multiple samples in one file (not implemented yet, ignored).
    #[arg(short = 'N', long = "multiple_samples")]
    pub multiple_samples: bool,
    /// Output file name; the format's extension is appended to it.
    #[arg(short, long = "file_name", value_name = "NAME", default_value = "data.txt")]
    pub file_name: String,
    /// Output file formats. Choices: simple, cplex.
    #[arg(
        short = 'F',
        long = "file_format",
        value_name = "FORMAT",
        num_args = 1..,
        default_value = "simple"
    )]
    pub file_format: Vec<Format>,
    /// Print data on stdout instead of writing files.
    #[arg(short = 'o', long)]
    pub stdout: bool,
    /// Seed the block generator for reproducible output.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Filter log messages more verbose than the given level.
    #[arg(short, long = "log_level", value_name = "LEVEL", default_value = "info")]
    pub log_level: EnumerableLevelFilter,
    /// Override log filters using RUST_LOG directives supported by the env_logger crate.
    #[arg(long = "log_filter", value_name = "FILTERS")]
    pub log_filter: Option<String>,
}

pub fn parse_cli_args() -> CliArgs {
    CliArgs::parse()
}
