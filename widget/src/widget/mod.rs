//! The search widget state object.

use crate::focus::{Focus, FocusNavigator, KeyAction, NavKey};
use crate::loader::PendingIndex;
use crate::render::ResultList;
use fastsearch_core::{LoadError, Query, Record};
use fastsearch_search::{SearchConfig, SearchEngine};

/// What the host must do after a key-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// Suppress the default handling (page scroll).
    pub prevent_default: bool,
    /// Link to follow.
    pub navigate_to: Option<String>,
}

/// Widget state: the engine, the input value, the rendered results and
/// keyboard focus.
///
/// Until an index is attached, input is recorded but searches nothing.
pub struct SearchWidget {
    engine: Option<SearchEngine>,
    config: SearchConfig,
    input: String,
    results: ResultList,
    results_available: bool,
    navigator: FocusNavigator,
}

/// Create operations.
impl SearchWidget {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            engine: None,
            config,
            input: String::new(),
            results: ResultList::default(),
            results_available: false,
            navigator: FocusNavigator::new(),
        }
    }

    /// Creates a widget with an already loaded index.
    pub fn with_records(records: Vec<Record>, config: SearchConfig) -> Self {
        let mut widget = Self::new(config);
        widget.attach_index(Ok(records));
        widget
    }
}

/// Index lifecycle.
impl SearchWidget {
    /// Takes the outcome of the index load.
    ///
    /// Failures and empty indexes are logged and leave the widget inert.
    pub fn attach_index(&mut self, loaded: Result<Vec<Record>, LoadError>) {
        match loaded {
            Ok(records) if records.is_empty() => {
                tracing::info!("index is empty; search disabled");
            }
            Ok(records) => {
                tracing::info!(records = records.len(), "search index ready");
                self.engine = Some(SearchEngine::new(records, self.config.clone()));
            }
            Err(LoadError::Status { status, body }) => {
                tracing::warn!(status, %body, "index request failed");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load index");
            }
        }
    }

    /// Attaches the index if its load has finished. Returns true if it did.
    pub fn poll_index(&mut self, pending: &mut PendingIndex) -> bool {
        match pending.try_take() {
            Some(loaded) => {
                self.attach_index(loaded);
                true
            }
            None => false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }
}

/// Event handlers.
impl SearchWidget {
    /// The input value changed.
    pub fn on_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.navigator.focus_input();

        let Some(engine) = &self.engine else {
            return;
        };

        let matches = engine.search(&Query::from(value));
        if matches.is_empty() {
            self.results_available = false;
            self.results.clear();
        } else {
            self.results = ResultList::from_matches(&matches);
            self.results_available = true;
        }
        // The list was replaced, markers included.
        self.navigator.reset();
    }

    /// The native clear control fired; `value` is the input value after it.
    pub fn on_search_cleared(&mut self, value: &str) {
        if value.is_empty() {
            self.reset();
        }
    }

    pub fn on_key_down(&mut self, key: NavKey) -> KeyResponse {
        let outcome = self
            .navigator
            .handle_key(key, self.results.len(), self.results_available);

        let navigate_to = match outcome.action {
            KeyAction::None => None,
            KeyAction::Reset => {
                self.reset();
                None
            }
            KeyAction::Open(index) => self.results.get(index).map(|e| e.permalink.clone()),
        };

        KeyResponse {
            prevent_default: outcome.prevent_default,
            navigate_to,
        }
    }

    /// Blanks the input and the results and focuses the input.
    pub fn reset(&mut self) {
        self.results_available = false;
        self.results.clear();
        self.input.clear();
        self.navigator.reset();
    }

    /// Focus moved outside the search box.
    pub fn blur(&mut self) {
        self.navigator.blur();
    }

    pub fn focus_input(&mut self) {
        self.navigator.focus_input();
    }
}

/// Accessors.
impl SearchWidget {
    pub fn input_value(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn results_available(&self) -> bool {
        self.results_available
    }

    pub fn focus(&self) -> Focus {
        self.navigator.focus()
    }

    /// Entry carrying the visual "focused" marker.
    pub fn focused_entry(&self) -> Option<usize> {
        self.navigator.marked()
    }

    /// Inner HTML of the results container.
    pub fn render_html(&self) -> String {
        self.results.to_html(self.navigator.marked())
    }
}
