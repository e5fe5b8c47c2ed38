//! Core types for the fastsearch widget.
//!
//! - `types`: records of the precomputed content index and the trimmed query.
//! - `index`: locating and loading the index document.

pub mod error;
pub mod index;
pub mod types;

pub use error::{LoadError, Result};
pub use index::{IndexConfig, IndexSource, load_index, parse_index};
pub use types::{Query, Record};
