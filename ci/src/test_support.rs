//! Test-only fakes for the resolver and disk CLI seams.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::core::env_table::ValueSource;
use crate::io::gcloud::DiskCli;
use crate::io::sources::ValueResolver;

/// Resolver returning fixed values per source; unknown sources resolve to
/// the empty string, matching the production total-lookup contract.
#[derive(Debug, Default)]
pub struct FixedResolver {
    values: HashMap<ValueSource, String>,
}

impl FixedResolver {
    pub fn with(mut self, source: ValueSource, value: &str) -> Self {
        self.values.insert(source, value.to_string());
        self
    }
}

impl ValueResolver for FixedResolver {
    fn resolve(&self, source: &ValueSource) -> String {
        self.values.get(source).cloned().unwrap_or_default()
    }
}

/// One recorded deletion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCall {
    pub project: String,
    pub zone: String,
    pub name: String,
}

/// [`DiskCli`] that writes a scripted listing and records deletions instead
/// of spawning gcloud.
#[derive(Debug)]
pub struct ScriptedDiskCli {
    listing: String,
    deleted: Mutex<Vec<DeleteCall>>,
}

impl ScriptedDiskCli {
    pub fn new(listing: &str) -> Self {
        Self {
            listing: listing.to_string(),
            deleted: Mutex::new(Vec::new()),
        }
    }

    /// Deletion calls recorded so far, in invocation order.
    pub fn deleted(&self) -> Vec<DeleteCall> {
        self.deleted.lock().expect("deleted lock").clone()
    }
}

impl DiskCli for ScriptedDiskCli {
    fn list_unused_disks(&self, _project: &str, out_path: &Path) -> Result<()> {
        fs::write(out_path, &self.listing)
            .with_context(|| format!("write scripted listing {}", out_path.display()))
    }

    fn delete_disk(&self, project: &str, zone: &str, name: &str) -> Result<()> {
        self.deleted.lock().expect("deleted lock").push(DeleteCall {
            project: project.to_string(),
            zone: zone.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }
}
