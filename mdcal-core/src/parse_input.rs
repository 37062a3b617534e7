//! Turning typed dates and months into calendar values.
use crate::calendar::CalendarViewState;
use crate::date::CalendarDate;
use anyhow::{Result, anyhow};
use chrono::{Days, NaiveDate};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Default accepted input date formats (parsing only).
const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Relative dates understood anywhere a date is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DateKeyword {
    Today,
    Yesterday,
    Tomorrow,
}

impl DateKeyword {
    fn resolve(self, reference: CalendarDate) -> Option<CalendarDate> {
        let date = reference.naive();
        let resolved = match self {
            DateKeyword::Today => Some(date),
            DateKeyword::Yesterday => date.checked_sub_days(Days::new(1)),
            DateKeyword::Tomorrow => date.checked_add_days(Days::new(1)),
        };
        resolved.map(CalendarDate::from)
    }
}

/// Configuration options for parsing functions.
#[derive(Copy, Clone, Debug)]
pub struct ParseOptions<'a> {
    /// The date to use as "today" for relative keywords.
    pub reference_date: CalendarDate,
    /// `chrono` format strings to try, in order. Empty means the defaults.
    pub formats: &'a [String],
}

/// Parses a single date.
///
/// Understands, in this order:
/// 1. the keywords `today`, `yesterday` and `tomorrow` (case-insensitive),
///    relative to `reference_date`;
/// 2. each of the configured formats, such as `"%Y-%m-%d"`.
///
/// ```
/// # use mdcal_core::CalendarDate;
/// # use mdcal_core::parse_input::{parse_date, ParseOptions};
/// let opts = ParseOptions {
///     reference_date: CalendarDate::new(2025, 7, 17).unwrap(),
///     formats: &[],
/// };
/// assert_eq!(parse_date("Yesterday", opts).unwrap(), CalendarDate::new(2025, 7, 16).unwrap());
/// assert_eq!(parse_date("2024-02-29", opts).unwrap(), CalendarDate::new(2024, 1, 29).unwrap());
/// assert!(parse_date("someday", opts).is_err());
/// ```
pub fn parse_date(input: &str, options: ParseOptions) -> Result<CalendarDate> {
    let s = input.trim();

    if let Ok(keyword) = s.parse::<DateKeyword>() {
        return keyword
            .resolve(options.reference_date)
            .ok_or_else(|| anyhow!("'{s}' is out of the supported date range"));
    }

    let parsed = if options.formats.is_empty() {
        DEFAULT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    } else {
        options
            .formats
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    };

    parsed.map(CalendarDate::from).ok_or_else(|| {
        anyhow!(
            "could not understand the date '{s}' (expected {} or a date like {})",
            keyword_list(),
            example_formats(options)
        )
    })
}

/// Parses the month a calendar should display.
///
/// Accepts `YYYY-MM` (e.g. `2024-02`) or anything [`parse_date`] accepts, in
/// which case the month containing that date is shown.
pub fn parse_month(input: &str, options: ParseOptions) -> Result<CalendarViewState> {
    let s = input.trim();
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return Ok(CalendarViewState::containing(first.into()));
    }
    parse_date(s, options)
        .map(CalendarViewState::containing)
        .map_err(|_| {
            anyhow!(
                "could not understand the month '{s}' (expected YYYY-MM, {} or a date like {})",
                keyword_list(),
                example_formats(options)
            )
        })
}

fn keyword_list() -> String {
    DateKeyword::iter()
        .map(|k| k.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn example_formats(options: ParseOptions) -> String {
    let example = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap_or_default();
    let render = |fmt: &str| CalendarDate::from(example).format(fmt);
    if options.formats.is_empty() {
        DEFAULT_FORMATS.iter().map(|f| render(f)).collect::<Vec<_>>().join(" or ")
    } else {
        options.formats.iter().map(|f| render(f)).collect::<Vec<_>>().join(" or ")
    }
}
