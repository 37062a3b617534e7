//! The notes directory: resolving a day's note and creating it on first use.
use crate::config::Config;
use crate::date::CalendarDate;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// Entry point for everything that touches note files.
#[derive(Debug)]
pub struct Notebook {
    pub config: Config,
}

/// A note that exists on disk after [`Notebook::open_note`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRef {
    pub date: CalendarDate,
    pub path: PathBuf,
    /// `true` when this call wrote the file.
    pub created: bool,
}

impl Notebook {
    /// Creates a new `Notebook`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Notebook` with a specific `Config`.
    ///
    /// This also ensures that the notes root directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        let notebook = Self::from_config(config);
        notebook.ensure_root()?;
        Ok(notebook)
    }

    /// Wraps `config` without touching the disk. Enough for [`Self::note_path`].
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Creates the notes root directory if it is missing.
    pub fn ensure_root(&self) -> Result<()> {
        let root = &self.config.notes_dir;
        fs::create_dir_all(root)
            .with_context(|| format!("creating notes dir {}", root.display()))
    }

    /// Where the note for `date` lives. Touches nothing on disk.
    pub fn note_path(&self, date: CalendarDate) -> PathBuf {
        self.config
            .path_pattern
            .resolve(date, &self.config.notes_dir)
    }

    /// Makes sure the note for `date` exists and returns its location.
    ///
    /// - Creates missing parent directories.
    /// - Writes `# {long date}` plus a blank line into a brand new file.
    /// - Never rewrites a file that is already there.
    ///
    /// The file is created exclusively, so two callers racing on the same day
    /// end up with one write and one `created: false`.
    pub fn open_note(&self, date: CalendarDate) -> Result<NoteRef> {
        let path = self.note_path(date);
        if path.is_dir() {
            bail!("{} is a directory, not a note", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating parent directory {}", parent.display()))?;
        }

        let created = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                let heading = format_note_heading(date, &self.config.heading_date_format);
                file.write_all(heading.as_bytes())
                    .with_context(|| format!("writing heading to {}", path.display()))?;
                info!("created note {}", path.display());
                true
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("note {} already exists", path.display());
                false
            }
            Err(e) => return Err(e).with_context(|| format!("creating {}", path.display())),
        };

        Ok(NoteRef {
            date,
            path,
            created,
        })
    }
}

/// Returns an output like this: `# Friday, 15 August 2025\n\n`
pub fn format_note_heading(date: CalendarDate, date_format: &str) -> String {
    format!("# {}\n\n", date.format(date_format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathPattern;
    use crate::tests::mk_config;
    use tempfile::tempdir;

    fn d(year: i32, month0: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month0, day).unwrap()
    }

    fn mk_notebook() -> (Notebook, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("notes");
        let notebook = Notebook::with_config(mk_config(root)).expect("notebook with config");
        (notebook, tmp)
    }

    #[test]
    fn with_config_creates_the_root() {
        let (notebook, _tmp) = mk_notebook();
        assert!(notebook.config.notes_dir.is_dir());
    }

    #[test]
    fn from_config_leaves_a_missing_root_alone() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("not-yet");
        let notebook = Notebook::from_config(mk_config(root.clone()));

        let path = notebook.note_path(d(2024, 1, 29));
        assert_eq!(path, root.join("2024").join("02").join("29.md"));
        assert!(!root.exists());

        notebook.ensure_root().unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn note_path_uses_the_configured_pattern() {
        let (mut notebook, _tmp) = mk_notebook();
        let root = notebook.config.notes_dir.clone();
        assert_eq!(
            notebook.note_path(d(2024, 0, 15)),
            root.join("2024").join("01").join("15.md")
        );

        notebook.config.path_pattern = PathPattern::new("daily/YYYY-MM-DD");
        assert_eq!(
            notebook.note_path(d(2024, 0, 15)),
            root.join("daily").join("2024-01-15.md")
        );
        assert!(!root.join("daily").exists());
    }

    #[test]
    fn open_note_creates_directories_and_heading() {
        let (notebook, _tmp) = mk_notebook();
        let note = notebook.open_note(d(2025, 7, 15)).expect("note created");

        assert!(note.created);
        assert_eq!(note.date, d(2025, 7, 15));
        let content = fs::read_to_string(&note.path).unwrap();
        assert_eq!(content, "# Friday, 15 August 2025\n\n");
    }

    #[test]
    fn open_note_keeps_existing_content() {
        let (notebook, _tmp) = mk_notebook();
        let first = notebook.open_note(d(2025, 7, 15)).unwrap();
        fs::write(&first.path, "# Mine\n\nalready written\n").unwrap();

        let second = notebook.open_note(d(2025, 7, 15)).unwrap();
        assert!(!second.created);
        assert_eq!(second.path, first.path);
        assert_eq!(
            fs::read_to_string(&second.path).unwrap(),
            "# Mine\n\nalready written\n"
        );
    }

    #[test]
    fn pattern_without_tokens_shares_one_note() {
        let (mut notebook, _tmp) = mk_notebook();
        notebook.config.path_pattern = PathPattern::new("inbox");

        let a = notebook.open_note(d(2025, 0, 1)).unwrap();
        let b = notebook.open_note(d(2025, 5, 30)).unwrap();
        assert!(a.created);
        assert!(!b.created);
        assert_eq!(a.path, notebook.config.notes_dir.join("inbox.md"));
        assert_eq!(fs::read_to_string(&b.path).unwrap(), "# Wednesday, 01 January 2025\n\n");
    }

    #[test]
    fn open_note_refuses_a_directory() {
        let (mut notebook, _tmp) = mk_notebook();
        notebook.config.path_pattern = PathPattern::new("YYYY.md");
        fs::create_dir_all(notebook.config.notes_dir.join("2025.md")).unwrap();
        assert!(notebook.open_note(d(2025, 0, 1)).is_err());
    }

    #[test]
    fn heading_uses_the_given_format() {
        assert_eq!(format_note_heading(d(2024, 1, 29), "%Y-%m-%d"), "# 2024-02-29\n\n");
    }
}
