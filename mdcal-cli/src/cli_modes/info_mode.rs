use super::{CliModeResult, parse_options};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mdcal_core::{Clock, Notebook, parse_input::parse_date};

pub fn path_mode(cli: &Cli, renderer: &Renderer, notebook: &Notebook) -> Result<CliModeResult> {
    if !cli.path {
        return Ok(CliModeResult::NothingToDo);
    }
    renderer.print_line(&notebook.config.notes_dir.display().to_string());
    Ok(CliModeResult::Finish)
}

pub fn resolve_mode(
    cli: &Cli,
    renderer: &Renderer,
    notebook: &Notebook,
    clock: &dyn Clock,
) -> Result<CliModeResult> {
    let Some(input) = &cli.resolve else {
        return Ok(CliModeResult::NothingToDo);
    };
    let date = parse_date(input, parse_options(notebook, clock.today()))?;
    renderer.print_line(&notebook.note_path(date).display().to_string());
    Ok(CliModeResult::Finish)
}
