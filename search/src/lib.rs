//! Fuzzy search over site records.
//!
//! Provides ranked, per-field fuzzy matching with highlight ranges.
//!
//! # Design
//!
//! - Character-level matching is delegated to nucleo's `Pattern`/`Matcher`.
//! - Each raw nucleo score is normalized against the score of the query
//!   matched with itself, giving a score in `[0, 1]` where 0 is perfect.
//! - A value matches when the normalized score (plus a location penalty
//!   unless `ignore_location`) stays within `threshold` and at least one
//!   contiguous run of matched characters reaches `min_match_char_length`.
//! - A record's score is the product of its matched values' scores, each
//!   raised to its key's normalized weight. Lower is better.
//!
//! # API
//!
//! - `SearchEngine::new()`: Takes ownership of the records
//! - `search()`: Returns ranked `MatchResult`s borrowing the records
//! - `highlight`: Pure range normalization and segmentation helpers

mod config;
mod engine;
pub mod highlight;
mod results;

pub use config::{CaseMatching, Field, SearchConfig, SearchKey};
pub use engine::SearchEngine;
pub use results::{FieldMatch, MatchRange, MatchResult};

#[cfg(test)]
mod tests;
