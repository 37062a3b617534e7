use super::{
    CliModeResult,
    editor_utils::{open_note_in_editor, resolve_editor},
    parse_options,
};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use mdcal_core::{Clock, Notebook, parse_input::parse_date};

pub fn open_mode(
    cli: &Cli,
    renderer: &Renderer,
    notebook: &Notebook,
    clock: &dyn Clock,
) -> Result<CliModeResult> {
    let Some(input) = &cli.open else {
        return Ok(CliModeResult::NothingToDo);
    };
    let date = parse_date(input, parse_options(notebook, clock.today()))?;
    let editor = resolve_editor(&notebook.config.editor)?;
    let note = open_note_in_editor(notebook, &editor, date)?;
    renderer.print_note(&note);
    Ok(CliModeResult::Finish)
}
