//! Almanac CLI - resolve seed numbers and seed ranges to their lowest
//! terminal-domain values

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use executor::{Executor, ParsedAlmanac};
use input::InputStore;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args);

    let store = InputStore::new(config.data_dir.clone());
    if !store.contains(&config.input) {
        return Err(error::InputError::NotFound {
            path: store.input_path(&config.input),
        }
        .into());
    }
    let lines = store.read_lines(&config.input)?;

    let parsed = ParsedAlmanac::parse(&lines)?;

    let formatter = OutputFormatter::new(config.quiet);
    if config.show_chain {
        formatter.print_chain(parsed.almanac.chain());
    }
    formatter.print_parse(&parsed);

    let executor = Executor::new(&config)?;
    let results = executor.execute(&parsed.almanac);

    for result in &results {
        formatter.print_result(result);
    }
    formatter.print_summary(&parsed, &results);

    Ok(())
}
