//! Search-as-you-type widget.
//!
//! `SearchWidget` owns all widget state and is driven by events:
//!
//! - `attach_index()`: Outcome of the one-time index load
//! - `on_input()`: The input value changed
//! - `on_search_cleared()`: The native clear control was used
//! - `on_key_down()`: Keyboard navigation, returns what the host must do
//!
//! Rendering is split into pure view models (`ResultEntry`) and targets
//! (`to_html()`, `to_text()`).

mod config;
mod focus;
mod loader;
mod render;
mod widget;

pub use config::{ConfigError, Settings};
pub use focus::{Focus, FocusNavigator, KeyAction, KeyOutcome, NavKey};
pub use loader::PendingIndex;
pub use render::{ResultEntry, ResultList, TitleSegment, highlight_html, tag_line};
pub use widget::{KeyResponse, SearchWidget};
