//! Output formatting for part results

use crate::executor::{ParsedAlmanac, PartResult};
use almanac_core::Chain;
use chrono::TimeDelta;

/// Output formatter for part results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print the parsed chain (suppressed in quiet mode)
    pub fn print_chain(&self, chain: &Chain) {
        if self.quiet {
            return;
        }
        print!("{}", chain);
    }

    /// Print a one-line parse report (suppressed in quiet mode)
    pub fn print_parse(&self, parsed: &ParsedAlmanac) {
        if self.quiet {
            return;
        }
        println!(
            "Parsed {} seed value(s) across {} stage(s) into {:?} (parse: {})",
            parsed.almanac.seeds().len(),
            parsed.almanac.chain().stage_count(),
            parsed.almanac.chain().terminal_name(),
            format_duration(parsed.parse_duration())
        );
    }

    /// Format and print a single part result
    pub fn print_result(&self, result: &PartResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &PartResult) {
        match result.answer {
            Some(answer) => println!("{}", answer),
            None => eprintln!("Part {}: no seed values", result.part),
        }
    }

    /// Print full output with timing
    fn print_full(&self, result: &PartResult) {
        match result.answer {
            Some(answer) => println!(
                "Part {}: {} (solve: {})",
                result.part,
                answer,
                format_duration(result.duration())
            ),
            None => eprintln!("Part {}: no seed values", result.part),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, parsed: &ParsedAlmanac, results: &[PartResult]) {
        if self.quiet {
            return;
        }

        let total_solve_time: TimeDelta = results.iter().map(|r| r.duration()).sum();

        println!();
        println!("--- Summary ---");
        println!("Parse time: {}", format_duration(parsed.parse_duration()));
        println!("Total solve time: {}", format_duration(total_solve_time));
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
