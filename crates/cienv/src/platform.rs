//! The catalogue of supported CI platforms.
//!
//! Every [`Platform`] knows its canonical name, the aliases users may write in
//! a config file, the environment variable that marks a build as running on
//! it, and where it keeps the repository owner and name.

use std::fmt;

use crate::env::Environment;

/// A supported CI platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    CircleCi,
    GitLabCi,
    Travis,
    CodeBuild,
    TeamCity,
    Drone,
    Jenkins,
    GitHubActions,
    CloudBuild,
}

impl Platform {
    /// All platforms, in automatic detection order.
    pub const ALL: [Platform; 9] = [
        Platform::CircleCi,
        Platform::GitLabCi,
        Platform::Travis,
        Platform::CodeBuild,
        Platform::TeamCity,
        Platform::Drone,
        Platform::Jenkins,
        Platform::GitHubActions,
        Platform::CloudBuild,
    ];

    /// Returns the canonical name of the platform.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Platform::CircleCi => "circleci",
            Platform::GitLabCi => "gitlab-ci",
            Platform::Travis => "travis",
            Platform::CodeBuild => "codebuild",
            Platform::TeamCity => "teamcity",
            Platform::Drone => "drone",
            Platform::Jenkins => "jenkins",
            Platform::GitHubActions => "github-actions",
            Platform::CloudBuild => "cloud-build",
        }
    }

    /// Returns every lowercase name accepted for the platform, canonical first.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Platform::CircleCi => &["circleci", "circle-ci"],
            Platform::GitLabCi => &["gitlab-ci", "gitlabci"],
            Platform::Travis => &["travis", "travisci", "travis-ci"],
            Platform::CodeBuild => &["codebuild"],
            Platform::TeamCity => &["teamcity"],
            Platform::Drone => &["drone"],
            Platform::Jenkins => &["jenkins"],
            Platform::GitHubActions => &["github-actions"],
            Platform::CloudBuild => &["cloud-build", "cloudbuild"],
        }
    }

    /// Looks up a platform by any of its names, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tfnotify_cienv::Platform;
    ///
    /// assert_eq!(Platform::from_name("CircleCI"), Some(Platform::CircleCi));
    /// assert_eq!(Platform::from_name("circle-ci"), Some(Platform::CircleCi));
    /// assert_eq!(Platform::from_name("bamboo"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|platform| platform.aliases().contains(&name.as_str()))
    }

    /// The variable whose presence marks a build as running on this platform.
    fn marker(self) -> &'static str {
        match self {
            Platform::CircleCi => "CIRCLECI",
            Platform::GitLabCi => "GITLAB_CI",
            Platform::Travis => "TRAVIS",
            Platform::CodeBuild => "CODEBUILD_BUILD_ID",
            Platform::TeamCity => "TEAMCITY_VERSION",
            Platform::Drone => "DRONE",
            Platform::Jenkins => "JENKINS_URL",
            Platform::GitHubActions => "GITHUB_ACTIONS",
            Platform::CloudBuild => "GOOGLE_CLOUD_BUILD",
        }
    }

    /// Returns whether `env` looks like a build running on this platform.
    #[must_use]
    pub fn matches<E: Environment + ?Sized>(self, env: &E) -> bool {
        env.var(self.marker()).is_some()
    }

    /// Reads the repository owner and name from the platform's variables.
    ///
    /// Missing values come back as empty strings.
    #[must_use]
    pub fn repository<E: Environment + ?Sized>(self, env: &E) -> (String, String) {
        let var = |key: &str| env.var(key).unwrap_or_default();
        match self {
            Platform::CircleCi => (
                var("CIRCLE_PROJECT_USERNAME"),
                var("CIRCLE_PROJECT_REPONAME"),
            ),
            Platform::GitLabCi => (var("CI_PROJECT_NAMESPACE"), var("CI_PROJECT_NAME")),
            Platform::Travis => split_slug(&var("TRAVIS_REPO_SLUG")),
            Platform::CodeBuild => parse_repo_url(&var("CODEBUILD_SOURCE_REPO_URL")),
            Platform::TeamCity => (String::new(), String::new()),
            Platform::Drone => (var("DRONE_REPO_OWNER"), var("DRONE_REPO_NAME")),
            Platform::Jenkins => parse_repo_url(&var("GIT_URL")),
            Platform::GitHubActions => split_slug(&var("GITHUB_REPOSITORY")),
            Platform::CloudBuild => match env.var("REPO_FULL_NAME") {
                Some(full_name) => split_slug(&full_name),
                None => (String::new(), var("REPO_NAME")),
            },
        }
    }

    /// Builds the descriptor of this platform as seen through `env`.
    #[must_use]
    pub fn descriptor<E: Environment + ?Sized>(self, env: &E) -> PlatformDescriptor {
        let (owner, name) = self.repository(env);
        PlatformDescriptor {
            platform: self,
            owner,
            name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A detected CI platform together with the repository it is building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDescriptor {
    platform: Platform,
    owner: String,
    name: String,
}

impl PlatformDescriptor {
    /// Creates a descriptor from explicit values.
    #[must_use]
    pub fn new(platform: Platform, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            platform,
            owner: owner.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the canonical CI name.
    #[must_use]
    pub fn ci(&self) -> &'static str {
        self.platform.name()
    }

    /// Returns the repository owner, empty if the platform does not expose it.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name, empty if the platform does not expose it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Splits an `owner/name` slug. Anything without a `/` yields two empty strings.
fn split_slug(slug: &str) -> (String, String) {
    match slug.split_once('/') {
        Some((owner, name)) => (owner.to_string(), name.to_string()),
        None => (String::new(), String::new()),
    }
}

/// Extracts owner and name from an HTTPS or SCP-style git remote URL.
fn parse_repo_url(url: &str) -> (String, String) {
    let trimmed = url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let mut segments = trimmed.rsplit(['/', ':']);
    match (segments.next(), segments.next()) {
        (Some(name), Some(owner)) if !name.is_empty() && !owner.is_empty() => {
            (owner.to_string(), name.to_string())
        }
        _ => (String::new(), String::new()),
    }
}
