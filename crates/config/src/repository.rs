//! Repository coordinates for the GitHub and GitLab notifiers.
//!
//! # Examples
//!
//! ```
//! use tfnotify_config::Repository;
//!
//! let repo: Repository = serde_yaml::from_str("owner: octo\nname: infra").unwrap();
//! assert_eq!(repo.owner(), "octo");
//! assert_eq!(repo.name(), "infra");
//! assert_eq!(repo.full_name(), "octo/infra");
//! ```

use serde::{Deserialize, Serialize};

/// The owner and name of a source repository.
///
/// Either part may be empty in a freshly loaded config; CI platform
/// information fills the gaps before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    owner: String,
    name: String,
}

impl Repository {
    /// Creates repository coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use tfnotify_config::Repository;
    ///
    /// let repo = Repository::new("octo", "infra");
    /// assert_eq!(repo.owner(), "octo");
    /// assert_eq!(repo.name(), "infra");
    /// ```
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full repository name in `"owner/name"` format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Returns whether both owner and name are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owner.is_empty() && self.name.is_empty()
    }

    /// Returns a copy where empty parts are replaced by `owner` and `name`.
    ///
    /// Parts that are already set are kept as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use tfnotify_config::Repository;
    ///
    /// let repo = Repository::new("octo", "").filled("ignored", "infra");
    /// assert_eq!(repo.full_name(), "octo/infra");
    /// ```
    #[must_use]
    pub fn filled(mut self, owner: &str, name: &str) -> Self {
        if self.owner.is_empty() {
            self.owner = owner.to_string();
        }
        if self.name.is_empty() {
            self.name = name.to_string();
        }
        self
    }
}
