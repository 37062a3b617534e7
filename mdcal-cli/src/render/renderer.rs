use super::theme::OneDark;
use mdcal_core::calendar::GRID_COLUMNS;
use mdcal_core::{CalendarGrid, DayCell, MonthRelation, NoteRef};
use termimad::{MadSkin, crossterm::style::Stylize};

/// Every day cell is a marker column plus a right-aligned two-digit label.
const CELL_WIDTH: usize = 3;

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.print_md(&md);
        } else {
            println!("{message}");
        }
    }

    /// Unstyled output meant for scripts (paths and the like).
    pub fn print_line(&self, line: &str) {
        println!("{line}");
    }

    pub fn print_note(&self, note: &NoteRef) {
        let verb = if note.created { "Created" } else { "Opened" };
        self.print_info(&format!("{verb} note {}", note.path.display()));
    }

    pub fn print_calendar(&self, grid: &CalendarGrid) {
        for line in self.calendar_lines(grid, None) {
            println!("{line}");
        }
    }

    /// Title, weekday header and the six week rows.
    ///
    /// `cursor` highlights a day of the displayed month. Without colors,
    /// the highlighted day is marked with `>` and today with `*`.
    pub fn calendar_lines(&self, grid: &CalendarGrid, cursor: Option<u32>) -> Vec<String> {
        let width = CELL_WIDTH * GRID_COLUMNS;
        let mut lines = Vec::with_capacity(8);

        let title = format!("{:^width$}", grid.title(), width = width);
        let header: String = grid
            .headers
            .iter()
            .map(|h| format!("{h:>width$}", width = CELL_WIDTH))
            .collect();
        if self.opts.use_color {
            lines.push(title.with(OneDark::RED).bold().to_string());
            lines.push(header.with(OneDark::YELLOW).to_string());
        } else {
            lines.push(title.trim_end().to_string());
            lines.push(header);
        }

        for row in grid.rows() {
            lines.push(row.iter().map(|cell| self.format_cell(cell, cursor)).collect());
        }
        lines
    }

    fn format_cell(&self, cell: &DayCell, cursor: Option<u32>) -> String {
        let selected = cell.is_selectable() && cursor == Some(cell.label);
        let label = format!("{:>2}", cell.label);

        if !self.opts.use_color {
            let marker = if selected {
                '>'
            } else if cell.is_today {
                '*'
            } else {
                ' '
            };
            return format!("{marker}{label}");
        }

        let styled = match cell.relation {
            MonthRelation::Previous | MonthRelation::Next => label.with(OneDark::COMMENT),
            MonthRelation::Current if cell.is_today => {
                label.with(OneDark::BG).on(OneDark::BLUE).bold()
            }
            MonthRelation::Current => label.with(OneDark::FG),
        };
        if selected {
            format!(" {}", styled.reverse())
        } else {
            format!(" {styled}")
        }
    }
}
