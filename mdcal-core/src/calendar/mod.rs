//! Month grid computation and the displayed-month state it is driven by.
mod grid;
mod view_state;

pub use grid::{
    CalendarGrid, DayCell, GRID_CELLS, GRID_COLUMNS, GRID_ROWS, MonthRelation, WEEKDAY_HEADERS,
};
pub use view_state::{CalendarViewState, Navigation};
