//! Ordered word-frequency table for text corpus analysis.
//!
//! `lexicon-core` provides a bounded, array-backed ordered symbol table with
//! order-statistics queries (rank, select), approximate lookup (floor,
//! ceiling) and range enumeration, plus a corpus loader that normalizes raw
//! text into word→frequency counts and a report layer for corpus statistics.
//!
//! The table trades write speed for read speed: lookups are binary searches
//! over contiguous sorted storage (O(log n)), while insertions and deletions
//! shift entries (O(n)). That fits the intended workload — a corpus built
//! once and queried many times — and is deliberately unsuitable for
//! write-heavy use.

pub mod corpus;
pub mod table;
pub mod types;
