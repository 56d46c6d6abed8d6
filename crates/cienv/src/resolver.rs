//! Explicit and automatic platform resolution.

use tracing::debug;

use crate::env::{Environment, ProcessEnv};
use crate::platform::{Platform, PlatformDescriptor};

/// Something that can tell which CI platform the process runs under.
///
/// [`EnvResolver`] is the real implementation. Tests implement this trait
/// directly to simulate a platform without setting environment variables.
pub trait PlatformSource {
    /// Resolves the platform registered under `name` (any alias, any case).
    fn by_name(&self, name: &str) -> Option<PlatformDescriptor>;

    /// Detects the platform from ambient markers.
    fn detect(&self) -> Option<PlatformDescriptor>;

    /// Resolves by `name` when it is non-empty, and falls back to detection
    /// otherwise.
    fn resolve(&self, name: &str) -> Option<PlatformDescriptor> {
        if name.is_empty() {
            self.detect()
        } else {
            self.by_name(name)
        }
    }
}

impl<T: PlatformSource + ?Sized> PlatformSource for &T {
    fn by_name(&self, name: &str) -> Option<PlatformDescriptor> {
        (**self).by_name(name)
    }

    fn detect(&self) -> Option<PlatformDescriptor> {
        (**self).detect()
    }
}

/// Resolves platforms by reading an [`Environment`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tfnotify_cienv::{EnvResolver, PlatformSource};
///
/// let env = HashMap::from([
///     ("TRAVIS_REPO_SLUG".to_string(), "octo/infra".to_string()),
/// ]);
/// let resolver = EnvResolver::new(env);
///
/// // Nothing marks this as a Travis build, but an explicit name still works.
/// assert!(resolver.detect().is_none());
/// let platform = resolver.by_name("Travis-CI").unwrap();
/// assert_eq!(platform.ci(), "travis");
/// assert_eq!(platform.owner(), "octo");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvResolver<E = ProcessEnv> {
    env: E,
}

impl EnvResolver<ProcessEnv> {
    /// Creates a resolver over the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: Environment> EnvResolver<E> {
    #[must_use]
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: Environment> PlatformSource for EnvResolver<E> {
    fn by_name(&self, name: &str) -> Option<PlatformDescriptor> {
        let platform = Platform::from_name(name);
        debug!(ci = %name, found = platform.is_some(), "resolving CI platform by name");
        platform.map(|p| p.descriptor(&self.env))
    }

    fn detect(&self) -> Option<PlatformDescriptor> {
        let detected = Platform::ALL
            .into_iter()
            .find(|platform| platform.matches(&self.env));
        match detected {
            Some(platform) => debug!(ci = %platform, "detected CI platform"),
            None => debug!("no CI platform detected"),
        }
        detected.map(|p| p.descriptor(&self.env))
    }
}
