use crate::date::{CalendarDate, days_in_month};
use chrono::{Days, NaiveDate};

/// Column headers, Sunday first, independent of locale.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

// Keeps every cell of a displayed month inside chrono's representable range.
pub(crate) const MIN_DISPLAY_YEAR: i32 = -262_000;
pub(crate) const MAX_DISPLAY_YEAR: i32 = 262_000;

/// Which month a grid cell belongs to, relative to the displayed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthRelation {
    Previous,
    Current,
    Next,
}

/// One day of the 6×7 month body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month shown in the cell, `1..=31`.
    pub label: u32,
    pub relation: MonthRelation,
    /// Only ever set on `Current` cells.
    pub is_today: bool,
    pub date: CalendarDate,
}

impl DayCell {
    /// Only days of the displayed month can be picked.
    pub fn is_selectable(&self) -> bool {
        self.relation == MonthRelation::Current
    }
}

/// A fully computed month view: the weekday header row plus exactly
/// [`GRID_CELLS`] day cells.
///
/// The grid always has six rows, even for months that would fit in five,
/// so its height never changes while navigating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub year: i32,
    pub month0: u32,
    pub headers: [&'static str; GRID_COLUMNS],
    pub cells: Vec<DayCell>,
}

impl CalendarGrid {
    /// Builds the grid for the displayed `(year, month0)`.
    ///
    /// Leading cells count backward from the day before the 1st: the first
    /// cell is the previous month's last day, then the day before it, and so
    /// on. Trailing cells count up from the 1st of the next month.
    ///
    /// ```
    /// # use mdcal_core::{CalendarDate, CalendarGrid, MonthRelation};
    /// let today = CalendarDate::new(2024, 1, 29).unwrap();
    /// let grid = CalendarGrid::build(2024, 1, today);
    /// assert_eq!(grid.cells.len(), 42);
    /// assert_eq!(grid.count(MonthRelation::Previous), 4);
    /// assert_eq!(grid.count(MonthRelation::Current), 29);
    /// assert_eq!(grid.count(MonthRelation::Next), 9);
    /// ```
    pub fn build(year: i32, month0: u32, today: CalendarDate) -> Self {
        let year = year
            .saturating_add((month0 / 12) as i32)
            .clamp(MIN_DISPLAY_YEAR, MAX_DISPLAY_YEAR);
        let month0 = month0 % 12;

        let first = first_of_month(year, month0);
        let first_weekday = CalendarDate::from(first).weekday_from_sunday() as usize;
        let month_days = days_in_month(year, month0) as usize;
        let leading = (1..=first_weekday as u64)
            .filter_map(|back| first.checked_sub_days(Days::new(back)))
            .map(|day| (day, MonthRelation::Previous));
        let body = first.iter_days().take(month_days).map(|day| (day, MonthRelation::Current));
        let trailing_start = first
            .checked_add_days(Days::new(month_days as u64))
            .unwrap_or(first);
        let trailing = trailing_start
            .iter_days()
            .take(GRID_CELLS - first_weekday - month_days)
            .map(|day| (day, MonthRelation::Next));

        let cells = leading
            .chain(body)
            .chain(trailing)
            .map(|(day, relation)| {
                let date = CalendarDate::from(day);
                DayCell {
                    label: date.day(),
                    relation,
                    is_today: relation == MonthRelation::Current && date.is_same_day(&today),
                    date,
                }
            })
            .collect();

        Self {
            year,
            month0,
            headers: WEEKDAY_HEADERS,
            cells,
        }
    }

    /// The body split into six weeks.
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// Long month name and year, e.g. `February 2024`.
    pub fn title(&self) -> String {
        CalendarDate::from(first_of_month(self.year, self.month0)).format("%B %Y")
    }

    /// The `Current` cell for a day of the displayed month.
    pub fn cell_for_day(&self, day: u32) -> Option<&DayCell> {
        self.cells
            .iter()
            .find(|cell| cell.is_selectable() && cell.label == day)
    }

    pub fn today_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }

    pub fn count(&self, relation: MonthRelation) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.relation == relation)
            .count()
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month0)
    }
}

fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(NaiveDate::MIN)
}
