//! tfnotify - resolves the CI platform and notifier for terraform results.
//!
//! This binary finds and validates the configuration, then prints the tag of
//! the selected notifier on stdout. An optional single argument names the
//! config file; otherwise the working directory and its ancestors are searched.

use std::path::PathBuf;

use anyhow::Context;
use tfnotify_cienv::EnvResolver;
use tfnotify_config::Config;
use tfnotify_config::persistence::find_config_file;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let path = find_config_file(explicit.as_deref()).context("failed to locate config")?;

    let resolver = EnvResolver::from_process();
    let resolved = Config::load_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?
        .complement(&resolver)
        .validate(&resolver)
        .with_context(|| format!("invalid config {}", path.display()))?;

    info!(
        path = %path.display(),
        ci = %resolved.config().ci,
        notifier = %resolved.notifier(),
        "config resolved"
    );
    println!("{}", resolved.notifier());

    Ok(())
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
