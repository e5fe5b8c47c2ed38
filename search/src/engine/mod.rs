mod matcher;

use crate::config::{Field, SearchConfig};
use crate::results::{FieldMatch, MatchResult};
use fastsearch_core::{Query, Record};
use matcher::FieldMatcher;
use std::cmp::Ordering;

/// Search engine over an immutable set of records.
///
/// Built once from the loaded index; every `search()` runs synchronously
/// against all records.
pub struct SearchEngine {
    records: Vec<Record>,
    /// Searched fields with weights normalized to sum to 1.
    keys: Vec<(Field, f64)>,
    config: SearchConfig,
}

/// Create operations.
impl SearchEngine {
    pub fn new(records: Vec<Record>, config: SearchConfig) -> Self {
        let total: f64 = config.keys.iter().map(|key| key.weight()).sum();
        let keys = config
            .keys
            .iter()
            .map(|key| (key.field(), key.weight() / total))
            .collect();

        Self {
            records,
            keys,
            config,
        }
    }
}

/// Accessors.
impl SearchEngine {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Search operations.
impl SearchEngine {
    /// Returns the records matching `query`, best first.
    ///
    /// An empty query matches nothing. Ties keep index order.
    pub fn search(&self, query: &Query) -> Vec<MatchResult<'_>> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut matcher = FieldMatcher::new(query, &self.config);
        let mut results: Vec<(f64, MatchResult<'_>)> = Vec::new();

        for (ref_index, record) in self.records.iter().enumerate() {
            let mut matches = Vec::new();
            let mut total = 1.0;

            for &(field, weight) in &self.keys {
                for (value_index, value) in field.values(record) {
                    let Some((score, ranges)) = matcher.match_value(value) else {
                        continue;
                    };
                    let base = if score == 0.0 { f64::EPSILON } else { score };
                    total *= base.powf(weight);
                    matches.push(FieldMatch {
                        field,
                        ref_index: value_index,
                        ranges,
                        score,
                    });
                }
            }

            if matches.is_empty() {
                continue;
            }

            if !self.config.include_matches {
                matches.clear();
            }

            results.push((
                total,
                MatchResult {
                    record,
                    ref_index,
                    score: self.config.include_score.then_some(total),
                    matches,
                },
            ));
        }

        if self.config.should_sort {
            results.sort_by(|(a, ra), (b, rb)| {
                a.partial_cmp(b)
                    .unwrap_or(Ordering::Equal)
                    .then(ra.ref_index.cmp(&rb.ref_index))
            });
        }

        if let Some(limit) = self.config.limit {
            results.truncate(limit);
        }

        tracing::debug!(query = %query, matches = results.len(), "search");

        results.into_iter().map(|(_, result)| result).collect()
    }
}
