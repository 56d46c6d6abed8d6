//! Read access to environment variables.
//!
//! Platform detection only ever reads the environment, so it goes through the
//! [`Environment`] trait. Production code uses [`ProcessEnv`]; tests hand in a
//! plain `HashMap` instead of touching process-global state.

use std::collections::HashMap;
use std::hash::BuildHasher;

/// A source of environment variables.
///
/// Implementations return `None` for variables that are unset or empty, so
/// callers never have to distinguish the two.
pub trait Environment {
    /// Returns the value of `key`, or `None` if it is unset or empty.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

impl<T: Environment + ?Sized> Environment for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
