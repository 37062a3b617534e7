mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{
    CliModeResult, open_mode, path_mode, picker_mode, resolve_mode, show_mode, use_color,
};
use log::debug;
use mdcal_core::{Config, Notebook, PathPattern, SystemClock};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mdcal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let _logger = logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut config = Config::load()?;
    if let Some(root) = &cli.root {
        config.notes_dir = root.clone();
    }
    if let Some(pattern) = &cli.pattern {
        config.path_pattern = PathPattern::new(pattern.as_str());
    }
    debug!(
        "notes in {} with pattern '{}'",
        config.notes_dir.display(),
        config.path_pattern
    );

    let notebook = Notebook::from_config(config);
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: use_color(&cli),
    }));
    let clock = SystemClock;

    if let CliModeResult::Finish = path_mode(&cli, &renderer, &notebook)? {
        return Ok(());
    }

    if let CliModeResult::Finish = resolve_mode(&cli, &renderer, &notebook, &clock)? {
        return Ok(());
    }

    // Only the modes below write notes; the ones above never touch the disk.
    notebook.ensure_root()?;

    if let CliModeResult::Finish = open_mode(&cli, &renderer, &notebook, &clock)? {
        return Ok(());
    }

    if let CliModeResult::Finish = show_mode(&cli, &renderer, &notebook, &clock)? {
        return Ok(());
    }

    picker_mode(&cli, &renderer, &notebook, &clock)?;
    Ok(())
}
