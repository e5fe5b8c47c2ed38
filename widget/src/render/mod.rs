//! Result entries and their renderings.

use fastsearch_search::highlight::segments;
use fastsearch_search::{Field, MatchRange, MatchResult};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSegment {
    pub text: String,
    pub highlighted: bool,
}

/// View model of one rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub title: Vec<TitleSegment>,
    /// Unhighlighted title, used as the link label.
    pub label: String,
    pub tag_line: Option<String>,
    pub permalink: String,
}

impl ResultEntry {
    pub fn from_match(result: &MatchResult<'_>) -> Self {
        let record = result.record;
        let ranges = result.ranges(Field::Title).unwrap_or_default();

        Self {
            title: segments(&record.title, ranges)
                .into_iter()
                .map(|s| TitleSegment {
                    text: s.text.to_string(),
                    highlighted: s.highlighted,
                })
                .collect(),
            label: record.title.clone(),
            tag_line: tag_line(&record.tags),
            permalink: record.permalink.clone(),
        }
    }

    pub fn to_html(&self, focused: bool) -> String {
        let mut html = String::new();
        let class = if focused { "post-entry focus" } else { "post-entry" };

        let _ = write!(html, r#"<li class="{class}"><header class="entry-header">"#);
        for segment in &self.title {
            let text = html_escape::encode_text(&segment.text);
            if segment.highlighted {
                let _ = write!(html, "<mark>{text}</mark>");
            } else {
                html.push_str(&text);
            }
        }
        html.push_str("&nbsp;»</header>");

        if let Some(tags) = &self.tag_line {
            let _ = write!(
                html,
                r#"<div class="entry-tags">{}</div>"#,
                html_escape::encode_text(tags)
            );
        }

        let _ = write!(
            html,
            r#"<a href="{}" aria-label="{}"></a></li>"#,
            html_escape::encode_double_quoted_attribute(&self.permalink),
            html_escape::encode_double_quoted_attribute(&self.label)
        );

        html
    }

    /// Single-line rendering with highlights in brackets.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.title {
            if segment.highlighted {
                let _ = write!(text, "[{}]", segment.text);
            } else {
                text.push_str(&segment.text);
            }
        }
        text.push_str(" »");
        if let Some(tags) = &self.tag_line {
            let _ = write!(text, " ({tags})");
        }
        let _ = write!(text, " <{}>", self.permalink);
        text
    }
}

/// Comma-separated tags, or `None` when there are none.
pub fn tag_line(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(tags.join(", "))
}

/// Escapes `text` and wraps each range in `<mark>`.
pub fn highlight_html(text: &str, ranges: &[MatchRange]) -> String {
    let mut html = String::with_capacity(text.len());
    for segment in segments(text, ranges) {
        let escaped = html_escape::encode_text(segment.text);
        if segment.highlighted {
            let _ = write!(html, "<mark>{escaped}</mark>");
        } else {
            html.push_str(&escaped);
        }
    }
    html
}

/// The rendered result list, in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultList {
    entries: Vec<ResultEntry>,
}

impl ResultList {
    pub fn from_matches(results: &[MatchResult<'_>]) -> Self {
        Self {
            entries: results.iter().map(ResultEntry::from_match).collect(),
        }
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ResultEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Concatenated list items; `focused` gets the `focus` class.
    pub fn to_html(&self, focused: Option<usize>) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.to_html(focused == Some(i)))
            .collect()
    }
}
