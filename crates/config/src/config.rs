//! Core configuration struct, loading, and completion.
//!
//! This module provides the main [`Config`] struct. A config goes through
//! three steps, each consuming the previous value:
//!
//! 1. [`Config::load_file`] reads it from disk
//! 2. [`Config::complement`] fills gaps from the detected CI platform
//! 3. [`Config::validate`] checks it and picks the notifier
//!
//! # Examples
//!
//! ```no_run
//! use tfnotify_cienv::EnvResolver;
//! use tfnotify_config::Config;
//!
//! # fn example() -> tfnotify_config::Result<()> {
//! let resolver = EnvResolver::from_process();
//! let resolved = Config::load_file("tfnotify.yaml")?
//!     .complement(&resolver)
//!     .validate(&resolver)?;
//! println!("notifying via {}", resolved.notifier());
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tfnotify_cienv::PlatformSource;
use tracing::{debug, instrument};

use crate::de::null_as_default;
use crate::error::Result;
use crate::notifier::{Notifier, NotifierKind};
use crate::persistence::read_config_file;
use crate::terraform::Terraform;

/// The tfnotify configuration.
///
/// # Examples
///
/// ```
/// use tfnotify_config::{Config, NotifierKind};
///
/// let config: Config = serde_yaml::from_str(
///     "ci: circleci\nnotifier:\n  slack:\n    channel: infra\n",
/// )
/// .unwrap();
/// assert_eq!(config.ci, "circleci");
/// assert_eq!(config.notifier_kind(), Some(NotifierKind::Slack));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The CI platform name. Matched case-insensitively; aliases such as
    /// `circle-ci` are accepted.
    pub ci: String,

    #[serde(deserialize_with = "null_as_default")]
    pub notifier: Notifier,

    #[serde(deserialize_with = "null_as_default")]
    pub terraform: Terraform,

    /// Template variables supplied at runtime. Never read from or written to
    /// the config file.
    #[serde(skip)]
    pub vars: HashMap<String, String>,

    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    /// Creates a new empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// Unknown keys are ignored. The path is remembered and available through
    /// [`Config::path`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or is not
    /// valid YAML for this schema.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "loading config file");
        let mut config: Config = read_config_file(path)?;
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Returns the file this configuration was loaded from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the active notifier, if any section is defined.
    ///
    /// See [`Notifier::selected`] for the priority order.
    #[must_use]
    pub fn notifier_kind(&self) -> Option<NotifierKind> {
        self.notifier.selected()
    }

    /// Fills settings left empty from the CI platform.
    ///
    /// The platform is looked up by `ci` when it is set, and detected from the
    /// environment otherwise. A detected platform also sets `ci` to its
    /// canonical name. If the GitHub section is defined, an empty repository
    /// owner or name is taken from the platform.
    ///
    /// Values already present are never overwritten, so applying this twice
    /// gives the same result as applying it once.
    #[must_use]
    #[instrument(skip_all, fields(ci = %self.ci))]
    pub fn complement<P: PlatformSource + ?Sized>(mut self, platforms: &P) -> Self {
        let Some(platform) = platforms.resolve(&self.ci) else {
            debug!("no CI platform to complement from");
            return self;
        };
        if self.ci.is_empty() {
            debug!(ci = platform.ci(), "using detected CI platform");
            self.ci = platform.ci().to_string();
        }
        self.fill_github_repository(platform.owner(), platform.name());
        self
    }

    /// Fills an empty GitHub repository owner or name, if the GitHub section
    /// is defined.
    pub(crate) fn fill_github_repository(&mut self, owner: &str, name: &str) {
        let github = &mut self.notifier.github;
        if github.is_defined() {
            github.repository = std::mem::take(&mut github.repository).filled(owner, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::{GitHubNotifier, SlackNotifier};
    use crate::repository::Repository;
    use tempfile::TempDir;
    use tfnotify_cienv::{Platform, PlatformDescriptor};

    /// Always answers with the same platform.
    struct FixedPlatform(PlatformDescriptor);

    impl PlatformSource for FixedPlatform {
        fn by_name(&self, name: &str) -> Option<PlatformDescriptor> {
            Platform::from_name(name)
                .map(|p| PlatformDescriptor::new(p, self.0.owner(), self.0.name()))
        }

        fn detect(&self) -> Option<PlatformDescriptor> {
            Some(self.0.clone())
        }
    }

    struct NoPlatform;

    impl PlatformSource for NoPlatform {
        fn by_name(&self, _: &str) -> Option<PlatformDescriptor> {
            None
        }

        fn detect(&self) -> Option<PlatformDescriptor> {
            None
        }
    }

    fn circleci() -> FixedPlatform {
        FixedPlatform(PlatformDescriptor::new(Platform::CircleCi, "foo", "bar"))
    }

    fn github_config(ci: &str) -> Config {
        Config {
            ci: ci.to_string(),
            notifier: Notifier {
                github: GitHubNotifier {
                    token: "ghp_xxx".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn default_config() {
        let config = Config::new();
        assert!(config.ci.is_empty());
        assert!(config.path().is_none());
        assert_eq!(config.notifier_kind(), None);
    }

    #[test]
    fn complement_fills_github_repository() {
        let config = github_config("circleci").complement(&circleci());
        assert_eq!(
            config.notifier.github.repository,
            Repository::new("foo", "bar")
        );
    }

    #[test]
    fn complement_keeps_explicit_repository() {
        let mut config = github_config("circleci");
        config.notifier.github.repository = Repository::new("mine", "");
        let config = config.complement(&circleci());
        assert_eq!(
            config.notifier.github.repository,
            Repository::new("mine", "bar")
        );
    }

    #[test]
    fn complement_sets_detected_ci() {
        let config = github_config("").complement(&circleci());
        assert_eq!(config.ci, "circleci");
        assert_eq!(config.notifier.github.repository.full_name(), "foo/bar");
    }

    #[test]
    fn complement_keeps_configured_ci_spelling() {
        let config = github_config("Circle-CI").complement(&circleci());
        assert_eq!(config.ci, "Circle-CI");
    }

    #[test]
    fn complement_ignores_undefined_github() {
        let config = Config {
            ci: "circleci".to_string(),
            notifier: Notifier {
                slack: SlackNotifier {
                    channel: "infra".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };
        let complemented = config.clone().complement(&circleci());
        assert_eq!(complemented, config);
        assert!(!complemented.notifier.github.is_defined());
    }

    #[test]
    fn complement_without_platform_is_noop() {
        let config = github_config("");
        assert_eq!(config.clone().complement(&NoPlatform), config);
    }

    #[test]
    fn complement_is_idempotent() {
        let once = github_config("").complement(&circleci());
        let twice = once.clone().complement(&circleci());
        assert_eq!(once, twice);
    }

    #[test]
    fn load_file_records_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tfnotify.yaml");
        std::fs::write(
            &path,
            r#"
ci: circleci
notifier:
  github:
    token: $GITHUB_TOKEN
    repository:
      owner: octo
      name: infra
terraform:
  use_raw_output: true
"#,
        )
        .unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.path(), Some(path.as_path()));
        assert_eq!(config.ci, "circleci");
        assert_eq!(config.notifier.github.token, "$GITHUB_TOKEN");
        assert_eq!(config.notifier.github.repository.full_name(), "octo/infra");
        assert!(config.terraform.use_raw_output);
    }

    #[test]
    fn vars_are_not_serialized() {
        let mut config = github_config("circleci");
        config.vars.insert("env".to_string(), "prod".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("vars"));
        assert!(!json.contains("prod"));
        assert!(!json.contains("path"));
    }

    #[test]
    fn vars_are_not_deserialized() {
        let config: Config = serde_yaml::from_str("ci: drone\nvars:\n  env: prod\n").unwrap();
        assert!(config.vars.is_empty());
    }
}
