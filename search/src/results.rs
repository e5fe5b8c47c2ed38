//! Search results types.

use crate::config::Field;
use fastsearch_core::Record;
use serde::Serialize;

/// Inclusive character range `[start, end]` to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn char_len(&self) -> usize {
        self.end + 1 - self.start
    }
}

impl From<(usize, usize)> for MatchRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

/// One matched value of a record field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    pub field: Field,
    /// Element index for array fields (`tags`).
    pub ref_index: Option<usize>,
    pub ranges: Vec<MatchRange>,
    pub score: f64,
}

/// A ranked match. Borrows the record from the engine.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub record: &'a Record,
    /// Position of the record in the loaded index.
    pub ref_index: usize,
    /// Set when `include_score` is enabled. 0.0 is a perfect match.
    pub score: Option<f64>,
    /// Empty unless `include_matches` is enabled.
    pub matches: Vec<FieldMatch>,
}

impl MatchResult<'_> {
    /// Highlight ranges of the first matched value of `field`.
    pub fn ranges(&self, field: Field) -> Option<&[MatchRange]> {
        self.matches
            .iter()
            .find(|m| m.field == field)
            .map(|m| m.ranges.as_slice())
    }
}
