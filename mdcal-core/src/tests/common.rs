use crate::{Config, PathPattern, config::DEFAULT_HEADING_DATE_FORMAT};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(notes_dir: PathBuf) -> Config {
    Config {
        notes_dir,
        editor: None,
        path_pattern: PathPattern::default(),
        heading_date_format: DEFAULT_HEADING_DATE_FORMAT.to_string(),
        input_date_formats: vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()],
    }
}
