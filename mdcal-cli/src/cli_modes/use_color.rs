use crate::Cli;
use std::io::{self, IsTerminal};

/// Resolves `--color` against `NO_COLOR` and whether stdout is a terminal.
pub fn use_color(cli: &Cli) -> bool {
    cli.color
        .enabled(std::env::var_os("NO_COLOR").is_some(), io::stdout().is_terminal())
}
