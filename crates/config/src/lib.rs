//! Configuration management for tfnotify.
//!
//! This crate finds, loads, completes, and validates the YAML configuration
//! that tells tfnotify which CI platform it runs under and which notifier to
//! post terraform results to.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct, loading, and completion
//! - [`validation`]: Validation and the resulting [`ResolvedConfig`]
//! - [`notifier`]: Notifier sections and notifier selection
//! - [`repository`]: Repository coordinates for GitHub and GitLab
//! - [`terraform`]: Per-command message settings
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Pipeline
//!
//! 1. [`persistence::find_config_file`] locates the file
//! 2. [`Config::load_file`] parses it
//! 3. [`Config::complement`] fills gaps from the CI platform
//! 4. [`Config::validate`] checks it and selects the notifier
//!
//! # Notifier Selection
//!
//! Only one notifier is used. When several sections are defined, the first
//! of `github`, `gitlab`, `slack`, `typetalk` wins.
//!
//! # Configuration Format
//!
//! ```yaml
//! ci: circleci
//! notifier:
//!   github:
//!     token: $GITHUB_TOKEN
//!     repository:
//!       owner: octo
//!       name: infra
//! terraform:
//!   plan:
//!     template: |
//!       {{ .Title }}
//!       {{ .Result }}
//! ```

pub mod config;
mod de;
pub mod error;
pub mod notifier;
pub mod persistence;
pub mod repository;
pub mod terraform;
pub mod validation;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use notifier::{
    GitHubNotifier, GitLabNotifier, Notifier, NotifierKind, SlackNotifier, TypetalkNotifier,
};
pub use repository::Repository;
pub use terraform::Terraform;
pub use validation::ResolvedConfig;
