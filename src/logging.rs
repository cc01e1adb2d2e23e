use crate::core::LOG_LEVEL_ENV;
use env_logger::{Builder, Env, Target, WriteStyle};
use std::fs::{File, OpenOptions};
use std::path::Path;

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
}

/// Logger writing to `file`, since the terminal is owned by the ratatui views.
/// Filters come from `SOKOBAN_LOG`, in `env_logger` directive syntax.
pub fn file_logger(file: File) -> Builder {
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV, DEFAULT_LOG_FILTER));
    builder
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format_timestamp_millis();
    builder
}

pub fn init_file_logger(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    file_logger(open_log_file(path)?).try_init()?;
    Ok(())
}
