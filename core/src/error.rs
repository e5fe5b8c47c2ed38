use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Reasons the index document could not be turned into records.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("index request failed with status {status}")]
    Status { status: u16, body: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed index: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid index location: {0}")]
    Location(String),
}
