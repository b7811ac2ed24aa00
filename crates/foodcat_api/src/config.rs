//! Backing file location.

use std::path::PathBuf;

/// Environment variable overriding the backing file path.
pub const DATA_PATH_ENV: &str = "FOODCAT_DATA_PATH";
/// Backing file used when nothing else is configured, relative to cwd.
pub const DEFAULT_DATA_FILE: &str = "data.csv";

/// Picks the backing file: explicit path, then `FOODCAT_DATA_PATH`, then
/// `data.csv`. Blank values are ignored.
pub fn resolve_data_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| {
            std::env::var(DATA_PATH_ENV)
                .ok()
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}
