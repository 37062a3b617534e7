mod cli_mode;
mod editor_utils;
mod info_mode;
mod open_mode;
mod picker_mode;
mod show_mode;
mod use_color;

pub use cli_mode::CliModeResult;
pub use info_mode::{path_mode, resolve_mode};
pub use open_mode::open_mode;
pub use picker_mode::picker_mode;
pub use show_mode::show_mode;
pub use use_color::use_color;

use mdcal_core::{CalendarDate, Notebook, parse_input::ParseOptions};

/// Date parsing options built from the notebook's config.
fn parse_options(notebook: &Notebook, today: CalendarDate) -> ParseOptions<'_> {
    ParseOptions {
        reference_date: today,
        formats: &notebook.config.input_date_formats,
    }
}
