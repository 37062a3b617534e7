use crate::date::is_valid_date_format;
use crate::path_template::PathPattern;
use anyhow::{Context, Result};
use directories::BaseDirs;
use log::{debug, warn};
use serde::Deserialize;
use std::{fs, path::PathBuf};

pub const DEFAULT_HEADING_DATE_FORMAT: &str = "%A, %d %B %Y";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under which note files are created.
    pub notes_dir: PathBuf,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Where a day's note lives relative to `notes_dir`, e.g. `YYYY/MM/DD.md`.
    pub path_pattern: PathPattern,
    /// strftime pattern for the heading written into new notes.
    pub heading_date_format: String,
    /// Formats accepted when a date is typed on the command line, tried in order.
    pub input_date_formats: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    notes_dir: Option<PathBuf>,
    editor: Option<String>,
    path_pattern: Option<String>,
    heading_date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// An unreadable or malformed file is reported and replaced by defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let notes_dir = file_config.notes_dir.unwrap_or_else(Self::default_notes_dir);

        // An empty pattern in the config file means "not set".
        let path_pattern = file_config
            .path_pattern
            .filter(|p| !p.is_empty())
            .map(PathPattern::new)
            .unwrap_or_default();

        let heading_date_format = match file_config.heading_date_format {
            Some(fmt) if is_valid_date_format(&fmt) => fmt,
            Some(fmt) => {
                warn!("invalid heading_date_format '{fmt}', using '{DEFAULT_HEADING_DATE_FORMAT}'");
                DEFAULT_HEADING_DATE_FORMAT.to_string()
            }
            None => DEFAULT_HEADING_DATE_FORMAT.to_string(),
        };

        let input_date_formats = file_config
            .input_date_formats
            .map(|formats| {
                formats
                    .into_iter()
                    .filter(|fmt| is_valid_date_format(fmt))
                    .collect::<Vec<_>>()
            })
            .filter(|formats| !formats.is_empty())
            .unwrap_or_else(Self::default_input_date_formats);

        Self {
            notes_dir,
            editor: file_config.editor,
            path_pattern,
            heading_date_format,
            input_date_formats,
        }
    }

    fn default_input_date_formats() -> Vec<String> {
        vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()]
    }

    /// Default notes root: `{data_dir}/mdcal`
    /// - macOS:   `~/Library/Application Support/mdcal`
    /// - Linux:   `$XDG_DATA_HOME/mdcal` or `~/.local/share/mdcal`
    /// - Windows: `%APPDATA%\mdcal`
    fn default_notes_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("mdcal");
            p
        } else {
            PathBuf::from("./mdcal")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("mdcal").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("mdcal").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!("reading config from {}", path.display());
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("mdcal").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            let expected_native = b.config_dir().join("mdcal").join("config.toml");
            assert!(c.contains(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_keys() {
        let toml = r#"
            notes_dir = "/tmp/my-notes"
            editor = "hx"
            path_pattern = "journal/YYYY-MM-DD"
            heading_date_format = "%d/%m/%Y"
            input_date_formats = ["%d.%m.%Y"]
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.notes_dir, Path::new("/tmp/my-notes"));
        assert_eq!(config.editor.as_deref(), Some("hx"));
        assert_eq!(config.path_pattern.as_str(), "journal/YYYY-MM-DD");
        assert_eq!(config.heading_date_format, "%d/%m/%Y");
        assert_eq!(config.input_date_formats, vec!["%d.%m.%Y".to_string()]);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::from_file_config(Config::parse_file("").unwrap());
        assert_eq!(config.path_pattern.as_str(), "YYYY/MM/DD.md");
        assert_eq!(config.heading_date_format, DEFAULT_HEADING_DATE_FORMAT);
        assert_eq!(config.input_date_formats.len(), 2);
        assert!(config.editor.is_none());
        assert!(config.notes_dir.ends_with("mdcal"));
    }

    #[test]
    fn empty_pattern_in_file_means_default() {
        let config = Config::from_file_config(Config::parse_file(r#"path_pattern = """#).unwrap());
        assert_eq!(config.path_pattern, PathPattern::default());
    }

    #[test]
    fn invalid_formats_are_replaced() {
        let toml = r#"
            heading_date_format = "%Q"
            input_date_formats = ["%Q"]
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.heading_date_format, DEFAULT_HEADING_DATE_FORMAT);
        assert_eq!(config.input_date_formats, Config::default_input_date_formats());
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("notes_dir = 3").is_err());
    }
}
