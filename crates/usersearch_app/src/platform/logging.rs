//! Platform logging initialization for usersearch_app.
//!
//! The terminal belongs to the UI, so logs only go to a file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

/// Initialize the file logger at `log_path`.
///
/// Logging stays disabled if the file cannot be created.
pub fn initialize(log_path: &Path, level: LevelFilter) {
    let file = match File::create(log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
            return;
        }
    };

    let _ = WriteLogger::init(level, build_config(), file);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
