//! Highlight range handling.
//!
//! Ranges are inclusive character indices. Before text is split into
//! segments they are clamped to the text, sorted, and overlapping or
//! adjacent ranges are merged, so any input yields well-formed output.

use crate::results::MatchRange;

/// A piece of text, highlighted or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Collapses sorted, deduplicated character indices into contiguous runs.
pub fn ranges_from_indices(indices: &[u32]) -> Vec<MatchRange> {
    let mut ranges: Vec<MatchRange> = Vec::new();

    for &index in indices {
        let index = index as usize;
        match ranges.last_mut() {
            Some(last) if last.end + 1 == index => last.end = index,
            Some(last) if last.end >= index => {}
            _ => ranges.push(MatchRange::new(index, index)),
        }
    }

    ranges
}

/// Clamps `ranges` to a text of `char_count` characters, sorts them and
/// merges overlapping or adjacent ranges.
pub fn normalize(ranges: &[MatchRange], char_count: usize) -> Vec<MatchRange> {
    let mut sorted: Vec<MatchRange> = ranges
        .iter()
        .filter(|r| r.start <= r.end && r.start < char_count)
        .map(|r| MatchRange::new(r.start, r.end.min(char_count - 1)))
        .collect();
    sorted.sort_unstable();

    let mut merged: Vec<MatchRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end + 1 => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }

    merged
}

/// Splits `text` into alternating plain and highlighted segments.
///
/// Empty segments are omitted. Concatenating the segments' text yields
/// `text` unchanged.
pub fn segments<'a>(text: &'a str, ranges: &[MatchRange]) -> Vec<Segment<'a>> {
    // Byte offset of every char, plus the end of the text.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = offsets.len() - 1;

    let mut out = Vec::new();
    let mut cursor = 0;

    for range in normalize(ranges, char_count) {
        let start = offsets[range.start];
        let end = offsets[range.end + 1];
        if cursor < start {
            out.push(Segment {
                text: &text[cursor..start],
                highlighted: false,
            });
        }
        out.push(Segment {
            text: &text[start..end],
            highlighted: true,
        });
        cursor = end;
    }

    if cursor < text.len() {
        out.push(Segment {
            text: &text[cursor..],
            highlighted: false,
        });
    }

    out
}
