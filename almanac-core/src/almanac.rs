//! Almanac document parsing and seed-list evaluation

use crate::chain::{Chain, ChainBuilder};
use crate::error::ParseError;
use crate::range::Interval;
use itertools::Itertools;
use std::str::FromStr;

/// How the raw seed token list is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Each token is one seed value.
    Individual,
    /// Tokens pair up as `(range start, range length)`.
    Ranges,
}

/// One parsed almanac document: the raw seed tokens and the rewrite chain.
///
/// Built once from input lines and queried read-only thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Almanac {
    seeds: Vec<u64>,
    chain: Chain,
}

impl Almanac {
    /// Parse an almanac from pre-split input lines.
    ///
    /// The first line must carry the seed list; every later non-blank line is
    /// either a `<source>-to-<dest> map:` header or a rule triple belonging to
    /// the most recent header.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines = lines.into_iter();
        let seeds_line = lines.next().ok_or(ParseError::EmptyInput)?;
        let seeds = parse_seeds(seeds_line)?;

        let mut builder: Option<ChainBuilder> = None;
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with(|c: char| c.is_ascii_alphabetic()) {
                let (source, dest) = parse_header(line)?;
                match builder.as_mut() {
                    None => builder = Some(ChainBuilder::begin(source, dest)),
                    Some(builder) => builder.append_stage(source, dest)?,
                }
            } else {
                let (dest_start, source_start, len) = parse_rule(line)?;
                match builder.as_mut() {
                    Some(builder) => builder.add_rule(dest_start, source_start, len),
                    None => return Err(ParseError::RuleBeforeHeader(line.to_string())),
                }
            }
        }

        let chain = builder.ok_or(ParseError::MissingMaps)?.build();
        Ok(Self { seeds, chain })
    }

    /// The raw seed tokens, in input order.
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// The rewrite chain.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// The seed tokens paired up as ranges. A trailing unpaired token is
    /// ignored.
    pub fn seed_ranges(&self) -> impl Iterator<Item = Interval> + '_ {
        self.seeds
            .iter()
            .copied()
            .tuples()
            .map(|(start, len)| Interval::new(start, len))
    }

    /// Smallest terminal-domain value over the seed list under the given
    /// interpretation. `None` when there are no seeds (or no complete range
    /// pair in range mode).
    pub fn lowest_location(&self, mode: SeedMode) -> Option<u64> {
        match mode {
            SeedMode::Individual => self.seeds.iter().map(|&seed| self.chain.resolve(seed)).min(),
            SeedMode::Ranges => self
                .seed_ranges()
                .filter_map(|span| self.chain.minimum_over_range(span))
                .min(),
        }
    }
}

impl FromStr for Almanac {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lines(s.lines())
    }
}

fn parse_number(token: &str) -> Result<u64, ParseError> {
    token.parse().map_err(|source| ParseError::InvalidNumber {
        token: token.to_string(),
        source,
    })
}

fn parse_seeds(line: &str) -> Result<Vec<u64>, ParseError> {
    let list = line
        .trim()
        .strip_prefix("seeds:")
        .ok_or_else(|| ParseError::MissingSeedsPrefix(line.to_string()))?;
    list.split_whitespace().map(parse_number).collect()
}

fn parse_header(line: &str) -> Result<(&str, &str), ParseError> {
    let name = line
        .strip_suffix("map:")
        .map(str::trim_end)
        .ok_or_else(|| ParseError::MalformedHeader(line.to_string()))?;
    name.split_once("-to-")
        .ok_or_else(|| ParseError::MalformedHeader(line.to_string()))
}

fn parse_rule(line: &str) -> Result<(u64, u64, u64), ParseError> {
    let (dest_start, source_start, len) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| ParseError::MalformedRule(line.to_string()))?;
    Ok((
        parse_number(dest_start)?,
        parse_number(source_start)?,
        parse_number(len)?,
    ))
}
