use crate::config::{CaseMatching, SearchConfig};
use crate::highlight::ranges_from_indices;
use crate::results::MatchRange;
use nucleo::pattern::{AtomKind, CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};

/// Matches one query against field values and scores them on a `[0, 1]`
/// scale, 0 being a perfect match.
pub(crate) struct FieldMatcher<'c> {
    config: &'c SearchConfig,
    pattern: Pattern,
    matcher: Matcher,
    /// Raw nucleo score of the query matched against itself.
    ideal: u32,
    buf: Vec<char>,
    indices: Vec<u32>,
}

impl<'c> FieldMatcher<'c> {
    pub(crate) fn new(query: &str, config: &'c SearchConfig) -> Self {
        let case_matching = match config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        let pattern = Pattern::new(query, case_matching, normalization, AtomKind::Fuzzy);
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);
        let mut buf = Vec::new();

        let ideal = pattern
            .score(haystack(query, &mut buf), &mut matcher)
            .filter(|score| *score > 0)
            .unwrap_or(1);

        Self {
            config,
            pattern,
            matcher,
            ideal,
            buf,
            indices: Vec::new(),
        }
    }

    /// Returns the score and highlight ranges of `value`, or `None` if it
    /// does not match within the configured threshold.
    pub(crate) fn match_value(&mut self, value: &str) -> Option<(f64, Vec<MatchRange>)> {
        self.indices.clear();
        let raw = self.pattern.indices(
            haystack(value, &mut self.buf),
            &mut self.matcher,
            &mut self.indices,
        )?;

        // Multiple atoms report unsorted, possibly repeated indices.
        self.indices.sort_unstable();
        self.indices.dedup();

        let ranges: Vec<MatchRange> = ranges_from_indices(&self.indices)
            .into_iter()
            .filter(|range| range.char_len() >= self.config.min_match_char_length)
            .collect();
        let first = ranges.first()?.start;

        let mut score = 1.0 - (f64::from(raw) / f64::from(self.ideal)).min(1.0);
        if !self.config.ignore_location {
            score += location_penalty(first, self.config.location, self.config.distance);
        }
        let score = score.min(1.0);

        (score <= self.config.threshold).then_some((score, ranges))
    }
}

/// One haystack slot per `char`, so match indices are char offsets.
///
/// `Utf32Str::new` folds grapheme clusters into a single slot, which would
/// shift highlights after flags, combining accents or `\r\n` in non-ASCII text.
fn haystack<'b>(value: &'b str, buf: &'b mut Vec<char>) -> Utf32Str<'b> {
    if value.is_ascii() {
        return Utf32Str::Ascii(value.as_bytes());
    }
    buf.clear();
    buf.extend(value.chars());
    Utf32Str::Unicode(buf)
}

/// Penalty for a match starting `start` chars in when expected at `location`.
fn location_penalty(start: usize, location: usize, distance: usize) -> f64 {
    let proximity = start.abs_diff(location);
    if distance == 0 {
        return if proximity == 0 { 0.0 } else { 1.0 };
    }
    proximity as f64 / distance as f64
}
