//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Almanac pipeline runner
#[derive(Parser, Debug)]
#[command(
    name = "almanac",
    about = "Resolve almanac seeds and seed ranges to locations",
    version
)]
pub struct Args {
    /// Input file name inside the data directory
    #[arg(default_value = "almanac.txt")]
    pub input: String,

    /// Data directory holding input files
    #[arg(long, default_value = "./data")]
    pub data_dir: PathBuf,

    /// Read the input from the test/ subdirectory of the data directory
    #[arg(long)]
    pub test: bool,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Number of threads for parallel part evaluation
    #[arg(long)]
    pub threads: Option<usize>,

    /// Print the parsed rewrite chain before solving
    #[arg(long)]
    pub show_chain: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
