//! Configuration file discovery and reading.
//!
//! # File Locations
//!
//! When no path is given explicitly, the working directory and then each of
//! its ancestors is searched for, in order:
//!
//! 1. `tfnotify.yaml`
//! 2. `tfnotify.yml`
//! 3. `.tfnotify.yaml`
//! 4. `.tfnotify.yml`
//!
//! The nearest directory containing any of them wins.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "tfnotify.yaml",
    "tfnotify.yml",
    ".tfnotify.yaml",
    ".tfnotify.yml",
];

/// Locates the configuration file.
///
/// A non-empty `explicit` path is returned as-is if it exists. Otherwise the
/// current working directory and its ancestors are searched.
///
/// # Errors
///
/// Returns [`ConfigError::ConfigNotFound`] if the explicit path does not exist
/// or the search finds nothing, and [`ConfigError::CurrentDir`] if the working
/// directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use tfnotify_config::persistence::find_config_file;
///
/// # fn main() -> tfnotify_config::Result<()> {
/// let path = find_config_file(None)?;
/// println!("Found config at: {}", path.display());
/// # Ok(())
/// # }
/// ```
pub fn find_config_file(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    find_config_file_from(explicit, &cwd)
}

/// Like [`find_config_file`], but searches from `start` instead of the
/// working directory.
///
/// # Errors
///
/// Returns [`ConfigError::ConfigNotFound`] if the explicit path does not exist
/// or the search finds nothing.
pub fn find_config_file_from(explicit: Option<&Path>, start: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        debug!(?path, "using explicit config path");
        return if path.exists() {
            Ok(path.to_path_buf())
        } else {
            Err(ConfigError::ConfigNotFound)
        };
    }

    find_from(start).ok_or(ConfigError::ConfigNotFound)
}

/// Searches `start` and its ancestors for a configuration file.
///
/// # Returns
///
/// Returns `Some(path)` for the first match, `None` otherwise.
#[must_use]
pub fn find_from(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                debug!(?path, "found config file");
                return Some(path);
            }
        }
    }
    debug!(?start, "no config file found");
    None
}

/// Reads and parses a YAML configuration file.
///
/// A file that is empty or contains only whitespace parses as `T::default()`.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The file content cannot be parsed
pub fn read_config_file<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    if content.trim().is_empty() {
        return Ok(T::default());
    }

    serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
