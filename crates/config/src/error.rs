//! Error types for configuration operations.
//!
//! This module defines the error types that can occur while finding, loading,
//! and validating a tfnotify configuration.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("{path}: no config file")]
    FileNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        /// The path of the malformed file.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// No configuration file could be located.
    #[error("config for tfnotify is not found at all")]
    ConfigNotFound,

    /// The working directory could not be determined.
    #[error("failed to get the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The `ci` field is empty.
    #[error("ci: need to be set")]
    MissingCi,

    /// The `ci` field names a platform that is not supported.
    #[error("{0}: not supported yet")]
    UnsupportedCi(String),

    /// A field required by a defined notifier section is empty.
    #[error("{0} is missing")]
    MissingField(&'static str),

    /// No notifier section is defined.
    #[error("notifier is missing")]
    MissingNotifier,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
