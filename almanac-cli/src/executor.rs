//! Parallel executor for evaluating almanac parts

use crate::config::Config;
use crate::error::ExecutorError;
use almanac_core::{Almanac, ParseError, SeedMode};
use chrono::{DateTime, TimeDelta, Utc};
use rayon::prelude::*;

/// A parsed almanac together with its parse timing
pub struct ParsedAlmanac {
    pub almanac: Almanac,
    pub parse_start: DateTime<Utc>,
    pub parse_end: DateTime<Utc>,
}

impl ParsedAlmanac {
    /// Parse input lines, recording parse timing internally
    pub fn parse(lines: &[String]) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let almanac = Almanac::from_lines(lines.iter().map(String::as_str))?;
        let parse_end = Utc::now();

        Ok(Self {
            almanac,
            parse_start,
            parse_end,
        })
    }

    /// Get the parse duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }
}

/// Result from evaluating a single part
#[derive(Debug, Clone)]
pub struct PartResult {
    pub part: u8,
    /// The lowest location, or `None` when the input had no seed values
    pub answer: Option<u64>,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl PartResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Evaluates parts against one parsed almanac on a rayon thread pool.
///
/// The chain is immutable after parsing, so both parts can evaluate
/// concurrently against the same almanac without locking.
pub struct Executor {
    thread_pool: rayon::ThreadPool,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            thread_pool,
            part_filter: config.part_filter,
        })
    }

    /// The parts this executor will evaluate, in order
    pub fn parts(&self) -> Vec<u8> {
        match self.part_filter {
            Some(part) => vec![part],
            None => vec![1, 2],
        }
    }

    /// Evaluate the requested parts, returning results in part order
    pub fn execute(&self, almanac: &Almanac) -> Vec<PartResult> {
        self.thread_pool.install(|| {
            self.parts()
                .into_par_iter()
                .map(|part| evaluate_part(almanac, part))
                .collect()
        })
    }
}

/// Seed interpretation for a part number
fn seed_mode(part: u8) -> SeedMode {
    match part {
        2 => SeedMode::Ranges,
        _ => SeedMode::Individual,
    }
}

/// Evaluate a single part with timing
fn evaluate_part(almanac: &Almanac, part: u8) -> PartResult {
    let solve_start = Utc::now();
    let answer = almanac.lowest_location(seed_mode(part));
    let solve_end = Utc::now();

    PartResult {
        part,
        answer,
        solve_start,
        solve_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    const EXAMPLE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    fn config(argv: &[&str]) -> Config {
        let args = Args::parse_from(std::iter::once("almanac").chain(argv.iter().copied()));
        Config::from_args(args)
    }

    fn parsed_example() -> ParsedAlmanac {
        let lines: Vec<String> = EXAMPLE.lines().map(str::to_string).collect();
        ParsedAlmanac::parse(&lines).unwrap()
    }

    #[test]
    fn test_executes_both_parts_in_order() {
        let executor = Executor::new(&config(&[])).unwrap();
        let results = executor.execute(&parsed_example().almanac);

        let answers: Vec<_> = results.iter().map(|r| (r.part, r.answer)).collect();
        assert_eq!(answers, vec![(1, Some(35)), (2, Some(46))]);
    }

    #[test]
    fn test_part_filter_runs_single_part() {
        let executor = Executor::new(&config(&["--part", "2"])).unwrap();
        let results = executor.execute(&parsed_example().almanac);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].part, 2);
        assert_eq!(results[0].answer, Some(46));
    }

    #[test]
    fn test_single_thread_pool_still_runs() {
        let executor = Executor::new(&config(&["--threads", "1"])).unwrap();
        let results = executor.execute(&parsed_example().almanac);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_parse_failure_surfaces() {
        let lines = vec!["not an almanac".to_string()];
        assert!(ParsedAlmanac::parse(&lines).is_err());
    }
}
