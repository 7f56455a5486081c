//! CLI argument definitions for navscrape.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `extract` | Extract a NAV series from a saved page and write the feeds |
//! | `profiles` | List built-in fund profiles |
//!
//! ```bash
//! # Fonchim page saved by the browser driver, JSON + CSV next to it
//! navscrape extract page.txt --profile fonchim-crescita \
//!     --json-out fonchim_crescita.json --csv-out fonchim_crescita.csv
//!
//! # Any page, flags only, feed printed to stdout
//! curl -s https://example.test/quote | navscrape extract - --html --name "Fondo X" --source https://example.test
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Extract fund NAV history from scraped pages.
#[derive(Debug, Parser)]
#[command(
    name = "navscrape",
    author,
    version,
    about = "Extract fund NAV history from scraped pages"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a NAV series from page text or HTML.
    Extract(ExtractArgs),
    /// List built-in fund profiles.
    Profiles,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Page file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: String,

    /// Treat the input as HTML (implied by .html/.htm or a leading `<`).
    #[arg(long, default_value_t = false)]
    pub html: bool,

    /// Built-in profile id (see `navscrape profiles`).
    #[arg(long, conflicts_with = "profile_file")]
    pub profile: Option<String>,

    /// YAML profile file.
    #[arg(long)]
    pub profile_file: Option<PathBuf>,

    /// Fund name; required without a profile.
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub isin: Option<String>,

    /// 3-letter currency code.
    #[arg(long)]
    pub currency: Option<String>,

    /// Source URL or identifier recorded in the feed.
    #[arg(long)]
    pub source: Option<String>,

    /// Position of the target series among the values of a row.
    #[arg(long)]
    pub value_index: Option<usize>,

    /// Header of the target series column in tables.
    #[arg(long)]
    pub series_label: Option<String>,

    /// Strategy order, comma separated (direct,year_block,table,adjacent_lines).
    #[arg(long, value_delimiter = ',')]
    pub strategies: Vec<String>,

    /// Which value to keep when a date repeats.
    #[arg(long, value_enum)]
    pub dedup: Option<DedupArg>,

    /// Write the JSON feed here.
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// Write the delimited feed here.
    #[arg(long)]
    pub csv_out: Option<PathBuf>,

    /// Stdout format when no output file is given.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Skip the summary on stderr.
    #[arg(long, short, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DedupArg {
    First,
    Last,
}
