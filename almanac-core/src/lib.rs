//! Almanac Range-Remapping Pipeline
//!
//! A chain of named interval-rewrite maps ("stages") composed into a single
//! lookup function. Each stage maps a source domain to a destination domain
//! through a set of disjoint half-open interval rules; values outside every
//! rule pass through unchanged. The chain resolves single values pointwise
//! and answers minimum-over-range queries by propagating sub-ranges, never by
//! enumerating values.
//!
//! # Overview
//!
//! This library provides:
//! - [`Interval`] and [`RewriteRule`]: the half-open range algebra
//! - [`Stage`]: one named rewrite map with point and range lookups
//! - [`ChainBuilder`] / [`Chain`]: ordered stage chains, immutable once built
//! - [`Almanac`]: a parsed input document (seed tokens plus chain) with
//!   seed-list reductions under either [`SeedMode`]
//!
//! # Quick Example
//!
//! ```
//! use almanac_core::{Almanac, SeedMode};
//!
//! let input = "\
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48";
//!
//! let almanac: Almanac = input.parse().unwrap();
//! assert_eq!(almanac.chain().resolve(79), 81);
//! assert_eq!(almanac.chain().resolve(13), 13);
//! assert_eq!(almanac.lowest_location(SeedMode::Individual), Some(13));
//! ```
//!
//! # Key Concepts
//!
//! ## Identity fallback
//!
//! A value (or sub-range) that no rule claims maps to itself. A range query
//! that intersects no rule anywhere in the chain is not an error; it simply
//! takes the identity path the whole way down.
//!
//! ## Range minimum without enumeration
//!
//! [`Stage::minimum_over_range`] splits the query span against every rule,
//! shifts the intersected pieces, passes the leftovers through, and recurses
//! into the rest of the chain with all resulting pieces. Because each rewrite
//! is an order-preserving shift within a piece, the terminal minimum is the
//! smallest piece start after full propagation.
//!
//! ## Immutable after construction
//!
//! [`ChainBuilder`] is the only mutable construction state; [`Chain`] is
//! frozen and safe for concurrent read-only use.

mod almanac;
mod chain;
mod error;
mod range;
mod stage;

// Re-export public API
pub use almanac::{Almanac, SeedMode};
pub use chain::{Chain, ChainBuilder};
pub use error::{ChainError, ParseError};
pub use range::{Interval, RewriteRule};
pub use stage::Stage;
