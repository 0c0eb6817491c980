//! Orchestration for `ci env-file`.
//!
//! Resolves every entry of the fixed environment table and writes the
//! `environment` file the containerized build steps read. Sources that
//! resolve to an empty value are skipped, never errors.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::env_table::{ENV_FILE_NAME, ENV_TABLE, render_env_lines};
use crate::io::sources::ValueResolver;

/// Outcome of writing the environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFileOutcome {
    pub path: PathBuf,
    /// Keys written, in table order.
    pub written: Vec<String>,
    /// Keys skipped because their source resolved to an empty value.
    pub skipped: Vec<String>,
}

/// Resolve the table through `resolver` and write `environment` under `root`.
pub fn write_env_file<R: ValueResolver>(root: &Path, resolver: &R) -> Result<EnvFileOutcome> {
    let mut pairs = Vec::with_capacity(ENV_TABLE.len());
    let mut written = Vec::new();
    let mut skipped = Vec::new();
    for entry in ENV_TABLE {
        let value = resolver.resolve(&entry.source);
        if value.is_empty() {
            debug!(key = entry.key, "skipping empty value");
            skipped.push(entry.key.to_string());
        } else {
            written.push(entry.key.to_string());
        }
        pairs.push((entry.key, value));
    }

    let path = root.join(ENV_FILE_NAME);
    fs::write(&path, render_env_lines(&pairs))
        .with_context(|| format!("write {}", path.display()))?;

    info!(
        path = %path.display(),
        written = written.len(),
        skipped = skipped.len(),
        "environment file written"
    );
    Ok(EnvFileOutcome {
        path,
        written,
        skipped,
    })
}
