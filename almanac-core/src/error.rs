//! Error types for the pipeline library

use std::num::ParseIntError;
use thiserror::Error;

/// Error type for parsing almanac input
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// The input has no lines at all
    #[error("input is empty")]
    EmptyInput,
    /// The first line does not carry the seed list
    #[error("first line must start with 'seeds:', got {0:?}")]
    MissingSeedsPrefix(String),
    /// A token that should be a number is not one
    #[error("invalid number {token:?}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// A rule line without exactly three numbers
    #[error("expected three numbers in rule line, got {0:?}")]
    MalformedRule(String),
    /// A header line without the `-to-` separator or the `map:` suffix
    #[error("map header must look like '<source>-to-<dest> map:', got {0:?}")]
    MalformedHeader(String),
    /// A rule line appeared before the first map header
    #[error("rule line {0:?} appears before any map header")]
    RuleBeforeHeader(String),
    /// The input contains a seed list but no map sections
    #[error("input has no map sections")]
    MissingMaps,
    /// A header could not be attached to the chain
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Error type for chain construction
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainError {
    /// No stage in the chain produces the new stage's source domain;
    /// the map sections are out of order or reference an unknown domain.
    #[error("no stage maps into {src:?}; cannot attach {src}-to-{dest}")]
    UnknownSourceDomain { src: String, dest: String },
    /// The stage producing the required domain already has a successor;
    /// attaching there would silently drop the rest of the chain.
    #[error("stage ending in {dest:?} already has a successor")]
    DestinationAlreadyLinked { dest: String },
}
