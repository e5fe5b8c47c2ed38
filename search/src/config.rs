use fastsearch_core::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    Sensitive,
    #[default]
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    Smart,
}

/// A searchable field of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Tags,
    Summary,
    Content,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Tags => "tags",
            Field::Summary => "summary",
            Field::Content => "content",
        }
    }

    /// Values of this field in `record`, paired with their element index
    /// for array fields.
    pub(crate) fn values(self, record: &Record) -> Vec<(Option<usize>, &str)> {
        match self {
            Field::Title => vec![(None, record.title.as_str())],
            Field::Summary => vec![(None, record.summary.as_str())],
            Field::Content => vec![(None, record.content.as_str())],
            Field::Tags => record
                .tags
                .iter()
                .enumerate()
                .map(|(i, tag)| (Some(i), tag.as_str()))
                .collect(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field to search, optionally weighted.
///
/// Accepts either a bare field name or a `{ name, weight }` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchKey {
    Name(Field),
    Weighted { name: Field, weight: f64 },
}

impl SearchKey {
    pub fn field(&self) -> Field {
        match self {
            SearchKey::Name(field) => *field,
            SearchKey::Weighted { name, .. } => *name,
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            SearchKey::Name(_) => 1.0,
            SearchKey::Weighted { weight, .. } => *weight,
        }
    }
}

impl From<Field> for SearchKey {
    fn from(field: Field) -> Self {
        SearchKey::Name(field)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Expected match position; only used when `ignore_location` is false.
    pub location: usize,
    /// How far from `location` a match may start before scoring 1.0.
    pub distance: usize,
    /// Maximum accepted score, 0.0 (perfect) to 1.0 (anything).
    pub threshold: f64,
    pub ignore_location: bool,
    pub include_matches: bool,
    pub include_score: bool,
    pub should_sort: bool,
    /// Shortest run of consecutive matched characters that counts.
    pub min_match_char_length: usize,
    pub keys: Vec<SearchKey>,
    pub limit: Option<usize>,
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            location: 0,
            distance: 100,
            threshold: 0.4,
            ignore_location: true,
            include_matches: true,
            include_score: false,
            should_sort: true,
            min_match_char_length: 2,
            keys: vec![
                Field::Title.into(),
                Field::Tags.into(),
                Field::Summary.into(),
                Field::Content.into(),
            ],
            limit: None,
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
        }
    }
}

impl SearchConfig {
    /// Validates option values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.threshold) {
            errors.push(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                self.threshold
            ));
        }

        if self.min_match_char_length == 0 {
            errors.push("min_match_char_length must be at least 1".to_string());
        }

        if self.keys.is_empty() {
            errors.push("keys must name at least one field".to_string());
        }

        for key in &self.keys {
            if !(key.weight() > 0.0 && key.weight().is_finite()) {
                errors.push(format!("weight of key '{}' must be positive", key.field()));
            }
        }

        if self.limit == Some(0) {
            errors.push("limit must be at least 1 when set".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let keys: Vec<SearchKey> = self
            .keys
            .iter()
            .filter(|key| key.weight() > 0.0 && key.weight().is_finite())
            .cloned()
            .collect();

        Self {
            threshold: if (0.0..=1.0).contains(&self.threshold) {
                self.threshold
            } else {
                defaults.threshold
            },
            min_match_char_length: if self.min_match_char_length == 0 {
                defaults.min_match_char_length
            } else {
                self.min_match_char_length
            },
            keys: if keys.is_empty() { defaults.keys } else { keys },
            limit: self.limit.filter(|limit| *limit > 0),
            ..self.clone()
        }
    }
}
