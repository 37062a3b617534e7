use clap::ValueEnum;

/// The `--color` switch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colors only on a terminal, and never when `NO_COLOR` is set.
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether calendars and messages get ANSI styling.
    pub fn enabled(self, no_color: bool, stdout_is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !no_color && stdout_is_terminal,
        }
    }
}
