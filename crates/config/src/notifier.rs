//! Notifier sections and the choice of the active one.
//!
//! A config may carry up to four notifier sections. There is no explicit
//! "enabled" flag: a section is *defined* as soon as any of its fields is set.
//! When several are defined, the first one in [`NotifierKind::PRIORITY`] wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::repository::Repository;

/// The kind of notifier tfnotify posts results to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifierKind {
    GitHub,
    GitLab,
    Slack,
    Typetalk,
}

impl NotifierKind {
    /// Notifier kinds in selection priority order, highest first.
    pub const PRIORITY: [NotifierKind; 4] = [
        NotifierKind::GitHub,
        NotifierKind::GitLab,
        NotifierKind::Slack,
        NotifierKind::Typetalk,
    ];

    /// Returns the tag downstream notifier clients are keyed by.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotifierKind::GitHub => "github",
            NotifierKind::GitLab => "gitlab",
            NotifierKind::Slack => "slack",
            NotifierKind::Typetalk => "typetalk",
        }
    }

    /// Returns whether this kind's section is defined in `notifier`.
    #[must_use]
    pub fn is_defined_in(self, notifier: &Notifier) -> bool {
        match self {
            NotifierKind::GitHub => notifier.github.is_defined(),
            NotifierKind::GitLab => notifier.gitlab.is_defined(),
            NotifierKind::Slack => notifier.slack.is_defined(),
            NotifierKind::Typetalk => notifier.typetalk.is_defined(),
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four optional notifier sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notifier {
    #[serde(deserialize_with = "null_as_default")]
    pub github: GitHubNotifier,
    #[serde(deserialize_with = "null_as_default")]
    pub gitlab: GitLabNotifier,
    #[serde(deserialize_with = "null_as_default")]
    pub slack: SlackNotifier,
    #[serde(deserialize_with = "null_as_default")]
    pub typetalk: TypetalkNotifier,
}

impl Notifier {
    /// Returns the active notifier: the first defined section in priority
    /// order, or `None` when no section is defined.
    ///
    /// # Examples
    ///
    /// ```
    /// use tfnotify_config::{Notifier, NotifierKind, SlackNotifier};
    ///
    /// let mut notifier = Notifier::default();
    /// assert_eq!(notifier.selected(), None);
    ///
    /// notifier.slack = SlackNotifier {
    ///     channel: "#infra".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(notifier.selected(), Some(NotifierKind::Slack));
    /// ```
    #[must_use]
    pub fn selected(&self) -> Option<NotifierKind> {
        NotifierKind::PRIORITY
            .into_iter()
            .find(|kind| kind.is_defined_in(self))
    }

    /// Returns every defined section, in priority order.
    #[must_use]
    pub fn defined(&self) -> Vec<NotifierKind> {
        NotifierKind::PRIORITY
            .into_iter()
            .filter(|kind| kind.is_defined_in(self))
            .collect()
    }
}

/// Posts results as GitHub pull request or commit comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubNotifier {
    pub token: String,
    /// API base URL for GitHub Enterprise. Empty means github.com.
    pub base_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub repository: Repository,
}

impl GitHubNotifier {
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.token.is_empty() || !self.base_url.is_empty() || !self.repository.is_empty()
    }
}

/// Posts results as GitLab merge request or commit notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitLabNotifier {
    pub token: String,
    /// API base URL for self-hosted GitLab. Empty means gitlab.com.
    pub base_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub repository: Repository,
}

impl GitLabNotifier {
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.token.is_empty() || !self.base_url.is_empty() || !self.repository.is_empty()
    }
}

/// Posts results to a Slack channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackNotifier {
    pub token: String,
    pub channel: String,
    /// Display name of the bot user.
    pub bot: String,
}

impl SlackNotifier {
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.token.is_empty() || !self.channel.is_empty() || !self.bot.is_empty()
    }
}

/// Posts results to a Typetalk topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypetalkNotifier {
    pub token: String,
    pub topic_id: String,
}

impl TypetalkNotifier {
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.token.is_empty() || !self.topic_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github() -> GitHubNotifier {
        GitHubNotifier {
            token: "ghp_xxx".to_string(),
            ..Default::default()
        }
    }

    fn slack() -> SlackNotifier {
        SlackNotifier {
            channel: "#infra".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_sections_are_undefined() {
        let notifier = Notifier::default();
        assert!(!notifier.github.is_defined());
        assert!(!notifier.gitlab.is_defined());
        assert!(!notifier.slack.is_defined());
        assert!(!notifier.typetalk.is_defined());
        assert_eq!(notifier.selected(), None);
        assert!(notifier.defined().is_empty());
    }

    #[test]
    fn any_single_field_defines_a_section() {
        let by_base_url = GitHubNotifier {
            base_url: "https://ghe.example.com/api/v3/".to_string(),
            ..Default::default()
        };
        assert!(by_base_url.is_defined());

        let by_repository = GitLabNotifier {
            repository: Repository::new("", "infra"),
            ..Default::default()
        };
        assert!(by_repository.is_defined());

        let by_bot = SlackNotifier {
            bot: "tfnotify".to_string(),
            ..Default::default()
        };
        assert!(by_bot.is_defined());

        let by_token = TypetalkNotifier {
            token: "secret".to_string(),
            ..Default::default()
        };
        assert!(by_token.is_defined());
    }

    #[test]
    fn github_wins_over_slack() {
        let notifier = Notifier {
            github: github(),
            slack: slack(),
            ..Default::default()
        };
        assert_eq!(notifier.selected(), Some(NotifierKind::GitHub));
        assert_eq!(
            notifier.defined(),
            vec![NotifierKind::GitHub, NotifierKind::Slack]
        );
    }

    #[test]
    fn selection_follows_priority() {
        let notifier = Notifier {
            gitlab: GitLabNotifier {
                token: "glpat".to_string(),
                ..Default::default()
            },
            slack: slack(),
            typetalk: TypetalkNotifier {
                topic_id: "1".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(notifier.selected(), Some(NotifierKind::GitLab));

        let notifier = Notifier {
            slack: slack(),
            typetalk: TypetalkNotifier {
                topic_id: "1".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(notifier.selected(), Some(NotifierKind::Slack));
    }

    #[test]
    fn kind_tags() {
        let tags: Vec<_> = NotifierKind::PRIORITY.iter().map(|k| k.to_string()).collect();
        assert_eq!(tags, ["github", "gitlab", "slack", "typetalk"]);
    }

    #[test]
    fn deserialize_null_section_as_undefined() {
        let notifier: Notifier = serde_yaml::from_str("github:\nslack:\n  channel: infra").unwrap();
        assert!(!notifier.github.is_defined());
        assert_eq!(notifier.selected(), Some(NotifierKind::Slack));
    }

    #[test]
    fn deserialize_numeric_topic_id_as_text() {
        let notifier: Notifier =
            serde_yaml::from_str("typetalk:\n  token: secret\n  topic_id: 12345").unwrap();
        assert_eq!(notifier.typetalk.topic_id, "12345");
    }

    #[test]
    fn deserialize_scalars_into_string_fields() {
        let notifier: Notifier = serde_yaml::from_str(
            "github:\n  token:\n  repository:\n    owner: 1234\n    name: infra\nslack:\n  channel: 000000",
        )
        .unwrap();
        assert_eq!(notifier.github.token, "");
        assert_eq!(notifier.github.repository.owner(), "1234");
        assert_eq!(notifier.slack.channel, "000000");
    }
}
