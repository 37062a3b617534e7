//! Interactive month picker.
//!
//! Draws the displayed month, moves a cursor over its days and opens the
//! highlighted day's note on Enter. Days of the adjacent months are shown
//! but can never be picked.
use super::{
    CliModeResult,
    editor_utils::{open_note_in_editor, resolve_editor},
};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use log::{debug, warn};
use mdcal_core::{
    CalendarDate, CalendarViewState, Clock, Navigation, Notebook, date::days_in_month,
};
use std::io::{self, IsTerminal, Write};
use termimad::crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

const HELP: &str = "arrows/hjkl move · p/n month · t today · enter open · q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Navigate(Navigation),
    /// Days to move the cursor by; clamped to the displayed month.
    MoveCursor(i32),
    Open,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Open(CalendarDate),
    Quit,
}

/// What the picker shows: the displayed month plus the highlighted day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub view: CalendarViewState,
    pub cursor: u32,
    pub status: Option<String>,
}

impl PickerState {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            view: CalendarViewState::containing(today),
            cursor: today.day(),
            status: None,
        }
    }

    pub fn update(&mut self, action: PickerAction, today: CalendarDate) -> Step {
        match action {
            PickerAction::Navigate(command) => {
                self.view = self.view.apply(command, today);
                self.cursor = match command {
                    Navigation::GotoToday => today.day(),
                    _ => self.cursor.min(self.month_days()),
                };
                Step::Continue
            }
            PickerAction::MoveCursor(delta) => {
                self.cursor = move_cursor(self.cursor, delta, self.month_days());
                Step::Continue
            }
            PickerAction::Open => match self.view.grid(today).cell_for_day(self.cursor) {
                Some(cell) => Step::Open(cell.date),
                None => Step::Continue,
            },
            PickerAction::Quit => Step::Quit,
        }
    }

    fn month_days(&self) -> u32 {
        days_in_month(self.view.year(), self.view.month0())
    }
}

pub fn action_for(key: &KeyEvent) -> Option<PickerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(PickerAction::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(PickerAction::MoveCursor(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(PickerAction::MoveCursor(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(PickerAction::MoveCursor(-7)),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerAction::MoveCursor(7)),
        KeyCode::PageUp | KeyCode::Char('p') => Some(PickerAction::Navigate(Navigation::PrevMonth)),
        KeyCode::PageDown | KeyCode::Char('n') => {
            Some(PickerAction::Navigate(Navigation::NextMonth))
        }
        KeyCode::Home | KeyCode::Char('t') => Some(PickerAction::Navigate(Navigation::GotoToday)),
        KeyCode::Enter => Some(PickerAction::Open),
        KeyCode::Esc | KeyCode::Char('q') => Some(PickerAction::Quit),
        _ => None,
    }
}

pub fn move_cursor(day: u32, delta: i32, month_days: u32) -> u32 {
    (i64::from(day) + i64::from(delta)).clamp(1, i64::from(month_days.max(1))) as u32
}

/// Raw mode on the alternate screen, restored on drop.
struct RawScreen;

impl RawScreen {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub fn picker_mode(
    _cli: &Cli,
    renderer: &Renderer,
    notebook: &Notebook,
    clock: &dyn Clock,
) -> Result<CliModeResult> {
    let today = clock.today();
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        renderer.print_calendar(&CalendarViewState::containing(today).grid(today));
        return Ok(CliModeResult::Finish);
    }

    let editor = resolve_editor(&notebook.config.editor)?;
    let mut state = PickerState::new(today);
    let mut screen = RawScreen::enter()?;

    loop {
        let today = clock.today();
        draw(renderer, notebook, &state, today)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = action_for(&key) else {
            continue;
        };

        match state.update(action, today) {
            Step::Continue => {}
            Step::Quit => break,
            Step::Open(date) => {
                debug!("picked {date}");
                drop(screen);
                let opened = open_note_in_editor(notebook, &editor, date);
                screen = RawScreen::enter()?;
                state.status = Some(match opened {
                    Ok(note) if note.created => format!("Created {}", note.path.display()),
                    Ok(note) => format!("Opened {}", note.path.display()),
                    Err(e) => {
                        warn!("could not open note for {date}: {e:#}");
                        format!("Error: {e:#}")
                    }
                });
            }
        }
    }

    drop(screen);
    Ok(CliModeResult::Finish)
}

fn draw(
    renderer: &Renderer,
    notebook: &Notebook,
    state: &PickerState,
    today: CalendarDate,
) -> Result<()> {
    let grid = state.view.grid(today);
    let mut lines = renderer.calendar_lines(&grid, Some(state.cursor));
    lines.push(String::new());
    if let Some(cell) = grid.cell_for_day(state.cursor) {
        lines.push(format!("{} → {}", cell.date, notebook.note_path(cell.date).display()));
    }
    lines.push(HELP.to_string());
    if let Some(status) = &state.status {
        lines.push(status.clone());
    }

    let mut out = io::stdout();
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    out.flush()?;
    Ok(())
}
