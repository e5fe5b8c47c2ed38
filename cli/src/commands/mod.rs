mod interactive;
mod search;

use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use fastsearch_widget::Settings;

use crate::cli::{Cli, Commands};

pub fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(
        cli.config.as_deref(),
        cli.index.as_deref(),
        cli.base.as_deref(),
    )?;

    match cli.command {
        Commands::Search(args) => {
            print!("{}", search::run(&settings, &args)?);
            Ok(())
        }
        Commands::Interactive => {
            interactive::run(&settings, io::stdin().lock(), io::stdout().lock())
        }
    }
}

/// Loads settings and applies command-line overrides.
///
/// Invalid values are logged and replaced by their defaults.
pub(crate) fn load_settings(
    config: Option<&Path>,
    index: Option<&str>,
    base: Option<&str>,
) -> Result<Settings> {
    let path = match config {
        Some(path) if !path.exists() => bail!("settings file not found: {}", path.display()),
        Some(path) => path.to_path_buf(),
        None => Settings::path(Path::new(".")),
    };

    let mut settings = Settings::load(&path)
        .with_context(|| format!("failed to load settings from {}", path.display()))?;

    if let Some(index) = index {
        settings.index.location = index.to_string();
    }
    if let Some(base) = base {
        settings.index.base = Some(base.to_string());
    }

    let errors = settings.validate();
    if !errors.is_empty() {
        for error in &errors {
            tracing::warn!(%error, "invalid setting replaced by default");
        }
        settings = settings.with_defaults_for_invalid();
    }

    Ok(settings)
}
