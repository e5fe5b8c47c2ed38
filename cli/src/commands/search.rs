use anyhow::{Context, Result};
use fastsearch_core::load_index;
use fastsearch_widget::{SearchWidget, Settings};

use crate::cli::{OutputFormat, SearchArgs};

/// Loads the index, runs one query and returns the rendering.
pub(super) fn run(settings: &Settings, args: &SearchArgs) -> Result<String> {
    let source = settings.index.source()?;
    let records = load_index(&source, settings.index.timeout())
        .with_context(|| format!("failed to load index from {source}"))?;

    let mut widget = SearchWidget::new(settings.search.clone());
    widget.attach_index(Ok(records));
    widget.on_input(&args.query);

    render(&widget, args.format)
}

pub(super) fn render(widget: &SearchWidget, format: OutputFormat) -> Result<String> {
    let entries = widget.results().entries();

    let output = match format {
        OutputFormat::Html if entries.is_empty() => String::new(),
        OutputFormat::Html => format!("{}\n", widget.render_html()),
        OutputFormat::Text => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {}\n", i + 1, entry.to_text()))
            .collect(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(entries)?),
    };

    Ok(output)
}
