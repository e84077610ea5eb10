//! File-backed tracing setup. The terminal belongs to the TUI, so log lines
//! never go to stdout or stderr once the UI is up.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;

pub const LOG_ENV: &str = "NEURALWAVES_LOG";

/// Build the level filter: `NEURALWAVES_LOG` wins over the configured level.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the file in use, or `None` when logging stays disabled because no
/// file could be opened.
pub fn init(settings: &Settings) -> Option<PathBuf> {
    let path = settings.log_file()?;
    let file = match open_log_file(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("neuralwaves: logging disabled, cannot open {}: {e}", path.display());
            return None;
        }
    };

    let installed = tracing_subscriber::registry()
        .with(build_filter(&settings.logging.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    installed.ok().map(|_| path)
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("neuralwaves").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn configured_level_is_used_as_fallback() {
        // Only meaningful when the override variable is unset.
        if std::env::var_os(LOG_ENV).is_none() {
            assert_eq!(build_filter("debug").to_string(), "debug");
        }
    }
}
