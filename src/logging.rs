//! Log setup.
//!
//! The terminal belongs to the UI, so records go to a file instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::config;

/// Open (append) the log file, creating its directory if needed
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize `env_logger` writing to the configured log file.
/// Filter comes from `RUST_LOG` (default `info`). Without a usable file,
/// logging stays off.
pub fn init_logging() {
    let Some(path) = config::log_file_path() else {
        return;
    };
    let Ok(file) = open_log_file(&path) else {
        return;
    };

    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    log::info!("strate-tui {} starting", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("strate.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
