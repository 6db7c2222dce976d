//! Configuration resolution from CLI args

use crate::cli::Args;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Input file name
    pub input: String,
    /// Resolved data directory (tilde expanded, test/ applied)
    pub data_dir: PathBuf,
    /// Part filter (None = both parts)
    pub part_filter: Option<u8>,
    /// Number of threads for parallel part evaluation
    pub thread_count: usize,
    /// Print the parsed chain before solving
    pub show_chain: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        let mut data_dir = expand_tilde(&args.data_dir);
        if args.test {
            data_dir.push("test");
        }

        let thread_count = args.threads.unwrap_or_else(num_cpus);

        Config {
            input: args.input,
            data_dir,
            part_filter: args.part,
            thread_count,
            show_chain: args.show_chain,
            quiet: args.quiet,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(&path_str[2..]);
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("almanac").chain(argv.iter().copied()))
    }

    #[test]
    fn test_test_flag_selects_subdirectory() {
        let config = Config::from_args(args(&["--data-dir", "/inputs", "--test"]));
        assert_eq!(config.data_dir, PathBuf::from("/inputs/test"));
    }

    #[test]
    fn test_plain_data_dir_is_kept() {
        let config = Config::from_args(args(&["--data-dir", "/inputs"]));
        assert_eq!(config.data_dir, PathBuf::from("/inputs"));
    }

    #[test]
    fn test_part_filter_passthrough() {
        let config = Config::from_args(args(&["--part", "2"]));
        assert_eq!(config.part_filter, Some(2));
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde(Path::new("/a/b")), PathBuf::from("/a/b"));
    }
}
