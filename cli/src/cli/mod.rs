use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};


#[derive(Debug, Parser)]
#[command(name = "fastsearch")]
#[command(about = "Search-as-you-type over a static site index", version)]
pub struct Cli {
    /// Settings file; defaults to ./fastsearch.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Index location (path or http(s) URL), overriding the settings.
    #[arg(long, global = true)]
    pub index: Option<String>,

    /// Page URL or directory a relative index location is resolved against.
    #[arg(long, global = true)]
    pub base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one query and print the rendered results.
    Search(SearchArgs),
    /// Drive the widget from stdin, one event per line.
    Interactive,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}
