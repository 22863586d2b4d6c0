use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

const APP_DIR_NAME: &str = "arcade-snake";
const LOG_FILE_NAME: &str = "arcade-snake.log";

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Maps the `--verbose` flag to a level filter.
#[must_use]
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs a file logger; the terminal itself is owned by the game screen.
///
/// Truncates any previous log at `path`, creating parent directories when
/// needed.
pub fn init(path: &Path, level: LevelFilter) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)
        .map_err(|error| io::Error::new(io::ErrorKind::AlreadyExists, error))
}
