//! Locating and loading the precomputed index document.
//!
//! The index is fetched exactly once. A relative location is resolved
//! against an optional base, which is either a page URL or a directory.
//! HTTP responses other than `200 OK` are failures that carry the body.

use crate::error::{LoadError, Result};
use crate::types::Record;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_INDEX_LOCATION: &str = "../index.json";

/// Where the index lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default = "default_location")]
    pub location: String,
    /// Page URL or directory a relative `location` is resolved against.
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            base: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl IndexConfig {
    pub fn source(&self) -> Result<IndexSource> {
        IndexSource::resolve(&self.location, self.base.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_location() -> String {
    DEFAULT_INDEX_LOCATION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// A resolved index location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSource {
    Path(PathBuf),
    Url(Url),
}

impl IndexSource {
    /// Resolves `location` against `base`.
    ///
    /// Absolute `http(s)` locations are used as-is. Otherwise an `http(s)`
    /// base is joined with URL semantics and any other base is treated as a
    /// directory.
    pub fn resolve(location: &str, base: Option<&str>) -> Result<Self> {
        if let Some(url) = parse_http_url(location) {
            return Ok(Self::Url(url));
        }

        match base {
            Some(base) => match parse_http_url(base) {
                Some(base_url) => base_url
                    .join(location)
                    .map(Self::Url)
                    .map_err(|e| LoadError::Location(format!("{location} against {base}: {e}"))),
                None => Ok(Self::Path(Path::new(base).join(location))),
            },
            None => Ok(Self::Path(PathBuf::from(location))),
        }
    }
}

impl fmt::Display for IndexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexSource::Path(path) => write!(f, "{}", path.display()),
            IndexSource::Url(url) => write!(f, "{url}"),
        }
    }
}

fn parse_http_url(s: &str) -> Option<Url> {
    Url::parse(s)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

/// Fetches and parses the index. Blocks the calling thread.
pub fn load_index(source: &IndexSource, timeout: Duration) -> Result<Vec<Record>> {
    tracing::debug!(%source, "loading index");

    let body = match source {
        IndexSource::Path(path) => std::fs::read_to_string(path)?,
        IndexSource::Url(url) => fetch(url, timeout)?,
    };

    parse_index(&body)
}

fn fetch(url: &Url, timeout: Duration) -> Result<String> {
    let client = Client::builder().timeout(timeout).build()?;
    let response = client.get(url.clone()).send()?;
    let status = response.status();
    let body = response.text()?;

    if status != StatusCode::OK {
        return Err(LoadError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

/// Parses an index document: a JSON array of records.
pub fn parse_index(body: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(body)?)
}
