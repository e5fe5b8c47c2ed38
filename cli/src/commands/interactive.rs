//! Line-driven widget session.
//!
//! Each stdin line is one event: a plain line replaces the input value,
//! `:down`, `:up`, `:right` and `:esc` are key presses, `:clear` is the
//! native clear control, `:blur`/`:focus` move focus out of and back into
//! the search box, `:q` ends the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use fastsearch_widget::{Focus, NavKey, PendingIndex, SearchWidget, Settings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Event {
    Input(String),
    Key(NavKey),
    Cleared,
    Blur,
    Focus,
    Quit,
}

pub(super) fn parse_line(line: &str) -> Event {
    match line.trim_end_matches(['\r', '\n']) {
        ":down" => Event::Key(NavKey::ArrowDown),
        ":up" => Event::Key(NavKey::ArrowUp),
        ":right" => Event::Key(NavKey::ArrowRight),
        ":esc" => Event::Key(NavKey::Escape),
        ":clear" => Event::Cleared,
        ":blur" => Event::Blur,
        ":focus" => Event::Focus,
        ":q" | ":quit" => Event::Quit,
        value => Event::Input(value.to_string()),
    }
}

pub(super) fn run(settings: &Settings, input: impl BufRead, out: impl Write) -> Result<()> {
    let pending = PendingIndex::from_config(&settings.index)?;
    let widget = SearchWidget::new(settings.search.clone());
    session(widget, Some(pending), input, out)
}

pub(super) fn session(
    mut widget: SearchWidget,
    mut pending: Option<PendingIndex>,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;

        let loaded = pending.as_mut().is_some_and(|p| widget.poll_index(p));
        if loaded {
            pending = None;
        }

        let mut navigate_to = None;
        match parse_line(&line) {
            Event::Input(value) => widget.on_input(&value),
            Event::Key(key) => navigate_to = widget.on_key_down(key).navigate_to,
            Event::Cleared => widget.on_search_cleared(""),
            Event::Blur => widget.blur(),
            Event::Focus => widget.focus_input(),
            Event::Quit => break,
        }

        write_state(&widget, navigate_to.as_deref(), &mut out)?;
    }

    Ok(())
}

fn write_state(
    widget: &SearchWidget,
    navigate_to: Option<&str>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    if !widget.is_ready() {
        writeln!(out, "(index not loaded)")?;
    }

    let focus = match widget.focus() {
        Focus::Input => "input".to_string(),
        Focus::Result(i) => format!("result {}", i + 1),
        Focus::Outside => "outside".to_string(),
    };
    writeln!(out, "input: {:?}  focus: {focus}", widget.input_value())?;

    for (i, entry) in widget.results().entries().iter().enumerate() {
        let marker = if widget.focused_entry() == Some(i) { '>' } else { ' ' };
        writeln!(out, "{marker} {}. {}", i + 1, entry.to_text())?;
    }

    if let Some(link) = navigate_to {
        writeln!(out, "open {link}")?;
    }

    out.flush()
}
