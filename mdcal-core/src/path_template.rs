//! Date-to-path templating.
//!
//! A pattern such as `YYYY/MM/DD.md` becomes `2024/01/15.md` for the 15th of
//! January 2024. Recognised placeholders are `YYYY`, `YY`, `MM` and `DD`; they
//! are case-sensitive and may repeat. Everything else, path separators
//! included, is copied verbatim.
use crate::date::CalendarDate;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_PATTERN: &str = "YYYY/MM/DD.md";
pub const NOTE_EXTENSION: &str = ".md";

/// An immutable path template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern(String);

impl PathPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitutes the placeholders for `date` and ensures an `.md` suffix.
    ///
    /// The pattern is scanned left to right. At each position the tokens are
    /// tried longest first, so `YYYY` is never split into two `YY`.
    ///
    /// ```
    /// # use mdcal_core::{CalendarDate, PathPattern};
    /// let date = CalendarDate::new(2024, 0, 15).unwrap();
    /// assert_eq!(PathPattern::new("YYYY/MM/DD.md").render(date), "2024/01/15.md");
    /// assert_eq!(PathPattern::new("YY-MM-DD").render(date), "24-01-15.md");
    /// ```
    pub fn render(&self, date: CalendarDate) -> String {
        let substitutions = token_values(date);
        let mut rendered = String::with_capacity(self.0.len() + NOTE_EXTENSION.len());
        let mut rest = self.0.as_str();

        'scan: while !rest.is_empty() {
            for (token, value) in &substitutions {
                if let Some(tail) = rest.strip_prefix(token) {
                    rendered.push_str(value);
                    rest = tail;
                    continue 'scan;
                }
            }
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                rendered.push(c);
            }
            rest = chars.as_str();
        }

        if !rendered.ends_with(NOTE_EXTENSION) {
            rendered.push_str(NOTE_EXTENSION);
        }
        rendered
    }

    /// Renders the pattern for `date` and places it under `root`.
    ///
    /// Leading separators in the rendered path are dropped so the result
    /// always stays below `root`. `root` itself is used as given.
    pub fn resolve(&self, date: CalendarDate, root: &Path) -> PathBuf {
        let rendered = self.render(date);
        let path = root.join(rendered.trim_start_matches(std::path::is_separator));
        debug!("resolved {} with '{}' to {}", date, self.0, path.display());
        path
    }
}

impl Default for PathPattern {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl From<&str> for PathPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for PathPattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shorthand for [`PathPattern::resolve`].
pub fn resolve(date: CalendarDate, pattern: &PathPattern, root: &Path) -> PathBuf {
    pattern.resolve(date, root)
}

/// Placeholder values in precedence order.
fn token_values(date: CalendarDate) -> [(&'static str, String); 4] {
    // Years keep their natural digit count: 999 stays "999", not "0999".
    let year4 = date.year().to_string();
    let year2: String = {
        let chars: Vec<char> = year4.chars().collect();
        chars[chars.len().saturating_sub(2)..].iter().collect()
    };
    [
        ("YYYY", year4),
        ("YY", year2),
        ("MM", format!("{:02}", date.month0() + 1)),
        ("DD", format!("{:02}", date.day())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month0: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month0, day).unwrap()
    }

    fn render(pattern: &str, date: CalendarDate) -> String {
        PathPattern::new(pattern).render(date)
    }

    #[test]
    fn default_pattern_nests_year_and_month() {
        let path = resolve(d(2024, 0, 15), &PathPattern::default(), Path::new("/root"));
        assert_eq!(path, PathBuf::from("/root").join("2024").join("01").join("15.md"));
    }

    #[test]
    fn pattern_without_tokens_maps_every_date_to_one_file() {
        let root = Path::new("/root");
        let pattern = PathPattern::new("notes");
        assert_eq!(pattern.resolve(d(2024, 0, 15), root), root.join("notes.md"));
        assert_eq!(pattern.resolve(d(1999, 11, 31), root), root.join("notes.md"));
    }

    #[test]
    fn empty_pattern_is_a_bare_extension() {
        let root = Path::new("/root");
        assert_eq!(PathPattern::new("").resolve(d(2024, 0, 15), root), root.join(".md"));
    }

    #[test]
    fn each_token_lands_where_the_pattern_puts_it() {
        let date = d(2031, 8, 4);
        assert_eq!(render("DD.MM.YYYY (YY)", date), "04.09.2031 (31).md");
        assert_eq!(render("MM-DD/YYYY_YY", date), "09-04/2031_31.md");
    }

    #[test]
    fn long_year_token_wins_over_short_one() {
        let date = d(2024, 0, 15);
        assert_eq!(render("YYYY", date), "2024.md");
        assert_eq!(render("YYYYY", date), "2024Y.md");
        assert_eq!(render("YYY", date), "24Y.md");
        assert_eq!(render("YYYYYY", date), "202424.md");
    }

    #[test]
    fn tokens_repeat_and_lowercase_passes_through() {
        let date = d(2024, 2, 5);
        assert_eq!(render("DD/DD/dd/yyyy", date), "05/05/dd/yyyy.md");
        assert_eq!(render("MMM", date), "03M.md");
    }

    #[test]
    fn extension_is_appended_once() {
        let date = d(2024, 0, 15);
        assert_eq!(render("YYYY/MM/DD.md", date), "2024/01/15.md");
        assert_eq!(render("YYYY/MM/DD", date), "2024/01/15.md");
        assert_eq!(render("YYYY/MM/DD.MD", date), "2024/01/15.MD.md");
        assert_eq!(render("DD.txt", date), "15.txt.md");

        let pattern = PathPattern::new("YYYY-MM-DD");
        let root = Path::new("/notes");
        assert_eq!(pattern.resolve(date, root), pattern.resolve(date, root));
    }

    #[test]
    fn short_years_are_not_padded() {
        assert_eq!(render("YYYY|YY", d(999, 0, 1)), "999|99.md");
        assert_eq!(render("YYYY|YY", d(5, 6, 7)), "5|5.md");
    }

    #[test]
    fn leading_separator_stays_under_root() {
        let root = Path::new("/root");
        let path = PathPattern::new("/YYYY/DD").resolve(d(2024, 0, 15), root);
        assert_eq!(path, root.join("2024").join("15.md"));
    }

    #[test]
    fn non_ascii_text_is_copied() {
        assert_eq!(render("diário/YYYY-MM-DD", d(2024, 0, 15)), "diário/2024-01-15.md");
    }
}
