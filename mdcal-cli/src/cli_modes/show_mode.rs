use super::{CliModeResult, parse_options};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mdcal_core::{Clock, Notebook, parse_input::parse_month};

pub fn show_mode(
    cli: &Cli,
    renderer: &Renderer,
    notebook: &Notebook,
    clock: &dyn Clock,
) -> Result<CliModeResult> {
    let Some(month) = &cli.show else {
        return Ok(CliModeResult::NothingToDo);
    };
    let today = clock.today();
    let view = parse_month(month, parse_options(notebook, today))?;
    renderer.print_calendar(&view.grid(today));
    Ok(CliModeResult::Finish)
}
