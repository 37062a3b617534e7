use super::grid::{CalendarGrid, MAX_DISPLAY_YEAR, MIN_DISPLAY_YEAR};
use crate::date::CalendarDate;

/// Commands that move the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
    PrevMonth,
    NextMonth,
    GotoToday,
}

/// The month a calendar view is currently showing.
///
/// Owned by whoever draws the calendar and changed only through
/// [`CalendarViewState::apply`]; it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarViewState {
    year: i32,
    month0: u32,
}

impl CalendarViewState {
    /// `month0` values past December carry into the following years.
    ///
    /// The year is clamped to the range a grid can display, so the state
    /// and its grid always name the same month.
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year: year
                .saturating_add((month0 / 12) as i32)
                .clamp(MIN_DISPLAY_YEAR, MAX_DISPLAY_YEAR),
            month0: month0 % 12,
        }
    }

    /// The view showing the month that contains `date`.
    pub fn containing(date: CalendarDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Pure transition: the state after running `command`.
    ///
    /// ```
    /// # use mdcal_core::{CalendarDate, CalendarViewState, Navigation};
    /// let today = CalendarDate::new(2025, 7, 15).unwrap();
    /// let january = CalendarViewState::new(2024, 0);
    /// let back = january.apply(Navigation::PrevMonth, today);
    /// assert_eq!((back.year(), back.month0()), (2023, 11));
    /// ```
    pub fn apply(self, command: Navigation, today: CalendarDate) -> Self {
        match command {
            Navigation::PrevMonth => self.shifted(-1),
            Navigation::NextMonth => self.shifted(1),
            Navigation::GotoToday => Self::containing(today),
        }
    }

    /// A fresh grid for the displayed month.
    pub fn grid(&self, today: CalendarDate) -> CalendarGrid {
        CalendarGrid::build(self.year, self.month0, today)
    }

    // Stops at the edge of the displayable range instead of wrapping.
    fn shifted(self, months: i64) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month0) + months;
        let year = total.div_euclid(12);
        if !(i64::from(MIN_DISPLAY_YEAR)..=i64::from(MAX_DISPLAY_YEAR)).contains(&year) {
            return self;
        }
        Self {
            year: year as i32,
            month0: total.rem_euclid(12) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> CalendarDate {
        CalendarDate::new(2025, 7, 15).unwrap()
    }

    fn ym(state: CalendarViewState) -> (i32, u32) {
        (state.year(), state.month0())
    }

    #[test]
    fn prev_from_january_wraps_to_december() {
        let state = CalendarViewState::new(2024, 0).apply(Navigation::PrevMonth, today());
        assert_eq!(ym(state), (2023, 11));
    }

    #[test]
    fn next_from_december_wraps_to_january() {
        let state = CalendarViewState::new(2024, 11).apply(Navigation::NextMonth, today());
        assert_eq!(ym(state), (2025, 0));
    }

    #[test]
    fn twelve_steps_forward_is_one_year() {
        for month0 in 0..12 {
            let start = CalendarViewState::new(2024, month0);
            let mut state = start;
            for _ in 0..12 {
                state = state.apply(Navigation::NextMonth, today());
            }
            assert_eq!(ym(state), (2025, month0));

            for _ in 0..12 {
                state = state.apply(Navigation::PrevMonth, today());
            }
            assert_eq!(state, start);
        }
    }

    #[test]
    fn next_then_prev_is_identity() {
        for month0 in 0..12 {
            let start = CalendarViewState::new(1999, month0);
            let state = start
                .apply(Navigation::NextMonth, today())
                .apply(Navigation::PrevMonth, today());
            assert_eq!(state, start);
        }
    }

    #[test]
    fn goto_today_jumps_to_the_month_of_today() {
        let state = CalendarViewState::new(1990, 3).apply(Navigation::GotoToday, today());
        assert_eq!(ym(state), (2025, 7));
    }

    #[test]
    fn new_normalises_month_overflow() {
        assert_eq!(ym(CalendarViewState::new(2024, 12)), (2025, 0));
        assert_eq!(ym(CalendarViewState::new(2024, 25)), (2026, 1));
    }

    #[test]
    fn grid_follows_the_displayed_month() {
        let state = CalendarViewState::new(2024, 1);
        let grid = state.grid(today());
        assert_eq!((grid.year, grid.month0), (2024, 1));
        assert_eq!(grid.cells.len(), 42);
    }

    #[test]
    fn navigation_stops_where_the_grid_does() {
        let last = CalendarViewState::new(MAX_DISPLAY_YEAR, 11);
        let state = last.apply(Navigation::NextMonth, today());
        assert_eq!(state, last);
        let grid = state.grid(today());
        assert_eq!((grid.year, grid.month0), ym(state));

        let first = CalendarViewState::new(MIN_DISPLAY_YEAR, 0);
        let state = first.apply(Navigation::PrevMonth, today());
        assert_eq!(state, first);
        let grid = state.grid(today());
        assert_eq!((grid.year, grid.month0), ym(state));

        let state = CalendarViewState::new(i32::MAX, 5);
        assert_eq!(ym(state), (MAX_DISPLAY_YEAR, 5));
        let grid = state.grid(today());
        assert_eq!((grid.year, grid.month0), ym(state));
    }
}
