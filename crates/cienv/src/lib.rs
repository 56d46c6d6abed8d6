//! CI platform detection for tfnotify.
//!
//! This crate answers two questions about the CI system tfnotify runs under:
//! which platform it is, and which repository the build belongs to.
//!
//! # Overview
//!
//! - [`platform`]: The catalogue of supported platforms, their accepted names,
//!   detection markers, and repository conventions
//! - [`env`]: Read access to environment variables, swappable in tests
//! - [`resolver`]: Explicit lookup by name and automatic detection
//!
//! # Resolution
//!
//! A platform is resolved in one of two ways:
//!
//! 1. Explicit: a configured CI name (case-insensitive, aliases accepted)
//! 2. Automatic: the first platform whose marker variable is set
//!
//! An explicit name always wins over automatic detection.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use tfnotify_cienv::{EnvResolver, PlatformSource};
//!
//! let env = HashMap::from([
//!     ("CIRCLECI".to_string(), "true".to_string()),
//!     ("CIRCLE_PROJECT_USERNAME".to_string(), "octo".to_string()),
//!     ("CIRCLE_PROJECT_REPONAME".to_string(), "infra".to_string()),
//! ]);
//! let resolver = EnvResolver::new(env);
//!
//! let platform = resolver.detect().unwrap();
//! assert_eq!(platform.ci(), "circleci");
//! assert_eq!(platform.owner(), "octo");
//! assert_eq!(platform.name(), "infra");
//! ```

pub mod env;
pub mod platform;
pub mod resolver;

pub use env::{Environment, ProcessEnv};
pub use platform::{Platform, PlatformDescriptor};
pub use resolver::{EnvResolver, PlatformSource};
