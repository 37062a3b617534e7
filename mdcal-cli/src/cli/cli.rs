use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

/// mdcal — Markdown notes picked from a calendar
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("mode").args(["path", "show", "resolve", "open"]).multiple(false)),
)]
pub struct Cli {
    /// Prints the notes root directory
    #[arg(long, short)]
    pub path: bool,
    /// Prints the calendar of a month instead of starting the picker
    /// (e.g. `mdcal --show 2024-02`, `mdcal --show`). Defaults to the current month.
    #[arg(long, short, num_args = 0..=1, default_missing_value = "today")]
    pub show: Option<String>,
    /// Prints the note path for a date without creating anything
    /// (e.g. `mdcal --resolve yesterday`, `mdcal --resolve 2024-02-29`)
    #[arg(long, short)]
    pub resolve: Option<String>,
    /// Opens the note for a date in your $EDITOR, creating it first if needed
    /// (e.g. `mdcal --open today`)
    #[arg(long, short)]
    pub open: Option<String>,

    /// Notes root directory. Overrides `notes_dir` from the config file.
    #[arg(long, env = "MDCAL_ROOT")]
    pub root: Option<PathBuf>,
    /// Path pattern using the YYYY, YY, MM and DD placeholders (e.g. `journal/YYYY-MM-DD`).
    /// Overrides `path_pattern` from the config file.
    #[arg(long, env = "MDCAL_PATTERN")]
    pub pattern: Option<String>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Raises log verbosity: `-v` for info, `-vv` for debug. `RUST_LOG` takes precedence.
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
    /// Writes logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
