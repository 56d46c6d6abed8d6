//! Validation of a complemented configuration.
//!
//! Validation runs the checks below in order and stops at the first failure:
//!
//! 1. `ci` is set and names a supported platform
//! 2. A defined GitHub section has a repository owner and name, after one more
//!    attempt to fill them from the platform named by `ci`
//! 3. A defined GitLab section has a repository owner and name (never filled
//!    from the platform)
//! 4. A defined Slack section has a channel
//! 5. A defined Typetalk section has a topic id
//! 6. At least one notifier section is defined
//!
//! Defining several notifier sections is not an error; the highest priority
//! one is used and a warning is logged.

use tfnotify_cienv::{Platform, PlatformSource};
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::notifier::NotifierKind;

/// A validated configuration and the notifier it selects.
///
/// Only [`Config::validate`] creates this type, so holding one means every
/// check passed. It gives read-only access to the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    config: Config,
    notifier: NotifierKind,
}

impl ResolvedConfig {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the notifier that results should be posted to.
    #[must_use]
    pub fn notifier(&self) -> NotifierKind {
        self.notifier
    }

    #[must_use]
    pub fn into_parts(self) -> (Config, NotifierKind) {
        (self.config, self.notifier)
    }
}

impl Config {
    /// Validates the configuration and selects the notifier.
    ///
    /// # Errors
    ///
    /// Returns the first failing check:
    ///
    /// - [`ConfigError::MissingCi`] if `ci` is empty
    /// - [`ConfigError::UnsupportedCi`] if `ci` names no known platform
    /// - [`ConfigError::MissingField`] if a defined section lacks a required value
    /// - [`ConfigError::MissingNotifier`] if no notifier section is defined
    ///
    /// # Examples
    ///
    /// ```
    /// use tfnotify_cienv::EnvResolver;
    /// use tfnotify_config::{Config, ConfigError, NotifierKind};
    /// use std::collections::HashMap;
    ///
    /// let resolver = EnvResolver::new(HashMap::<String, String>::new());
    ///
    /// let config: Config = serde_yaml::from_str(
    ///     "ci: travis-ci\nnotifier:\n  slack:\n    channel: infra\n",
    /// )
    /// .unwrap();
    /// let resolved = config.validate(&resolver).unwrap();
    /// assert_eq!(resolved.notifier(), NotifierKind::Slack);
    ///
    /// let err = Config::default().validate(&resolver).unwrap_err();
    /// assert!(matches!(err, ConfigError::MissingCi));
    /// ```
    #[instrument(skip_all, fields(ci = %self.ci))]
    pub fn validate<P>(mut self, platforms: &P) -> Result<ResolvedConfig>
    where
        P: PlatformSource + ?Sized,
    {
        if self.ci.is_empty() {
            return Err(ConfigError::MissingCi);
        }
        if Platform::from_name(&self.ci).is_none() {
            return Err(ConfigError::UnsupportedCi(self.ci));
        }

        if self.notifier.github.is_defined() {
            if let Some(platform) = platforms.by_name(&self.ci) {
                self.fill_github_repository(platform.owner(), platform.name());
            }
            let repository = &self.notifier.github.repository;
            if repository.owner().is_empty() {
                return Err(ConfigError::MissingField("github.repository.owner"));
            }
            if repository.name().is_empty() {
                return Err(ConfigError::MissingField("github.repository.name"));
            }
        }

        if self.notifier.gitlab.is_defined() {
            let repository = &self.notifier.gitlab.repository;
            if repository.owner().is_empty() {
                return Err(ConfigError::MissingField("gitlab.repository.owner"));
            }
            if repository.name().is_empty() {
                return Err(ConfigError::MissingField("gitlab.repository.name"));
            }
        }

        if self.notifier.slack.is_defined() && self.notifier.slack.channel.is_empty() {
            return Err(ConfigError::MissingField("slack.channel"));
        }

        if self.notifier.typetalk.is_defined() && self.notifier.typetalk.topic_id.is_empty() {
            return Err(ConfigError::MissingField("typetalk.topic_id"));
        }

        let Some(notifier) = self.notifier.selected() else {
            return Err(ConfigError::MissingNotifier);
        };

        let defined = self.notifier.defined();
        if defined.len() > 1 {
            let sections: Vec<&str> = defined.iter().map(|k| k.as_str()).collect();
            warn!(
                defined = ?sections,
                selected = %notifier,
                "multiple notifier sections configured, only the highest priority one is used"
            );
        }

        debug!(%notifier, "config validated");
        Ok(ResolvedConfig {
            config: self,
            notifier,
        })
    }
}
