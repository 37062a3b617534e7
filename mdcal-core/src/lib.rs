pub mod calendar;
pub mod config;
pub mod date;
pub mod notebook;
pub mod parse_input;
pub mod path_template;

#[cfg(test)]
mod tests;

pub use calendar::{CalendarGrid, CalendarViewState, DayCell, MonthRelation, Navigation};
pub use config::Config;
pub use date::{CalendarDate, Clock, FixedClock, SystemClock};
pub use notebook::{NoteRef, Notebook};
pub use path_template::{PathPattern, resolve};
