//! Keyboard focus over the input box and the rendered results.
//!
//! Exactly one of `{input, result_1..result_n}` is active while focus is
//! inside the search box. At most one entry carries the visual marker.

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowDown,
    ArrowUp,
    ArrowRight,
    Other,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => NavKey::Escape,
            "ArrowDown" | "Down" => NavKey::ArrowDown,
            "ArrowUp" | "Up" => NavKey::ArrowUp,
            "ArrowRight" | "Right" => NavKey::ArrowRight,
            _ => NavKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    /// Zero-based position in the rendered list.
    Result(usize),
    /// Focus is somewhere outside the search box.
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    /// Clear the input and the results.
    Reset,
    /// Follow the link of the entry at this position.
    Open(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    pub action: KeyAction,
}

impl KeyOutcome {
    const IGNORED: KeyOutcome = KeyOutcome {
        prevent_default: false,
        action: KeyAction::None,
    };

    const SCROLL_HANDLED: KeyOutcome = KeyOutcome {
        prevent_default: true,
        action: KeyAction::None,
    };
}

#[derive(Debug, Clone, Default)]
pub struct FocusNavigator {
    focus: Focus,
    marked: Option<usize>,
}

impl FocusNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Entry carrying the visual "focused" marker.
    pub fn marked(&self) -> Option<usize> {
        self.marked
    }

    pub fn reset(&mut self) {
        self.focus = Focus::Input;
        self.marked = None;
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn blur(&mut self) {
        self.focus = Focus::Outside;
    }

    /// Handles a key-down with `result_count` rendered results.
    pub fn handle_key(
        &mut self,
        key: NavKey,
        result_count: usize,
        results_available: bool,
    ) -> KeyOutcome {
        if self.focus == Focus::Input {
            self.marked = None;
        }

        if key == NavKey::Escape {
            self.reset();
            return KeyOutcome {
                prevent_default: false,
                action: KeyAction::Reset,
            };
        }

        if !results_available || result_count == 0 || self.focus == Focus::Outside {
            return KeyOutcome::IGNORED;
        }

        match (key, self.focus) {
            (NavKey::ArrowDown, Focus::Input) => {
                self.enter(0);
                KeyOutcome::SCROLL_HANDLED
            }
            (NavKey::ArrowDown, Focus::Result(i)) => {
                if i + 1 < result_count {
                    self.enter(i + 1);
                }
                KeyOutcome::SCROLL_HANDLED
            }
            (NavKey::ArrowUp, Focus::Result(0)) => {
                self.reset();
                KeyOutcome::SCROLL_HANDLED
            }
            (NavKey::ArrowUp, Focus::Result(i)) => {
                self.enter(i - 1);
                KeyOutcome::SCROLL_HANDLED
            }
            (NavKey::ArrowUp, _) => KeyOutcome::SCROLL_HANDLED,
            (NavKey::ArrowRight, Focus::Result(i)) => KeyOutcome {
                prevent_default: false,
                action: KeyAction::Open(i),
            },
            _ => KeyOutcome::IGNORED,
        }
    }

    fn enter(&mut self, index: usize) {
        self.focus = Focus::Result(index);
        self.marked = Some(index);
    }
}
