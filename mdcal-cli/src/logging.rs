use anyhow::Result;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use std::path::Path;

/// Level used when `RUST_LOG` is not set.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Starts logging to stderr, or to `log_file` when given.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<LoggerHandle> {
    let mut logger = Logger::try_with_env_or_str(default_level(verbose))?;
    if let Some(path) = log_file {
        logger = logger.log_to_file(FileSpec::try_from(path.to_path_buf())?);
    }
    Ok(logger.start()?)
}
