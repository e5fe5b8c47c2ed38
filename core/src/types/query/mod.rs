use nutype::nutype;

/// Search input as handed to the matching engine.
///
/// Surrounding whitespace is stripped on construction. An empty query is
/// valid and matches nothing.
#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display, Serialize, Deserialize)
)]
pub struct Query(String);

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Query::new(value.to_string())
    }
}

#[cfg(test)]
mod tests;
