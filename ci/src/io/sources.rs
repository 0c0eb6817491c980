//! Source resolution for environment table entries.
//!
//! Resolution is total: a missing file, an unreadable file, or an unset
//! variable resolves to the empty string, which the writer then skips. No
//! failure on this path ever surfaces to the caller.

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::core::env_table::{CREDENTIALS_FILE, CREDENTIALS_MOUNT_PATH, ValueSource};

/// Resolves a [`ValueSource`] to its string value.
pub trait ValueResolver {
    /// Total lookup: absent or unreadable sources resolve to `""`.
    fn resolve(&self, source: &ValueSource) -> String;
}

/// Resolver backed by a working directory and the process environment.
#[derive(Debug, Clone)]
pub struct WorkspaceResolver {
    root: PathBuf,
}

impl WorkspaceResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_file_or_empty(&self, name: &str) -> String {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!(path = %path.display(), err = %err, "credential file unreadable, treating as empty");
                String::new()
            }
        }
    }

    fn credentials_path_or_empty(&self) -> String {
        let path = self.root.join(CREDENTIALS_FILE);
        match fs::metadata(&path) {
            Ok(meta) if meta.len() > 0 => CREDENTIALS_MOUNT_PATH.to_string(),
            _ => {
                debug!(path = %path.display(), "no usable credentials file");
                String::new()
            }
        }
    }
}

impl ValueResolver for WorkspaceResolver {
    fn resolve(&self, source: &ValueSource) -> String {
        match source {
            ValueSource::File(name) => self.read_file_or_empty(name),
            ValueSource::Var(name) => env::var(name).unwrap_or_default(),
            ValueSource::CredentialsPath => self.credentials_path_or_empty(),
        }
    }
}
