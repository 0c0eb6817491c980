//! Orchestration for `ci reap-disks`.
//!
//! Deleting a cluster does not delete its persistent disks, so CI sweeps the
//! project for disks with no attached users and deletes them. The sweep is
//! single-pass: list into `unused_disks.json`, parse, delete each entry.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::core::disks::{DiskListing, parse_disk_listing};
use crate::io::gcloud::{DiskCli, LISTING_FILE};

/// Environment variable naming the project to sweep. Required.
pub const PROJECT_VAR: &str = "GCLOUD_PROJECT";

/// Outcome of a reaper sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReapOutcome {
    /// The project has no unused disks.
    Empty,
    /// Deletion was invoked for this many disks.
    Deleted(usize),
    /// Listing output was not valid JSON; carries the raw content for
    /// reporting. No deletions were attempted.
    Unparseable(String),
}

/// Read the required project id from the environment.
pub fn project_from_env() -> Result<String> {
    env::var(PROJECT_VAR).with_context(|| format!("read required env var {PROJECT_VAR}"))
}

/// Run one sweep over `project`, writing the listing under `root`.
///
/// Deletions are independent: each disk gets its own deletion command, and
/// no deletion outcome stops the sweep.
#[instrument(skip_all, fields(project))]
pub fn run_reap<C: DiskCli>(root: &Path, cli: &C, project: &str) -> Result<ReapOutcome> {
    let listing_path = root.join(LISTING_FILE);
    cli.list_unused_disks(project, &listing_path)?;
    let raw = fs::read_to_string(&listing_path)
        .with_context(|| format!("read {}", listing_path.display()))?;

    let disks = match parse_disk_listing(&raw) {
        DiskListing::Disks(disks) => disks,
        DiskListing::Unparseable(raw) => {
            warn!("disk listing was not valid JSON");
            return Ok(ReapOutcome::Unparseable(raw));
        }
    };

    if disks.is_empty() {
        info!("no unused disks");
        return Ok(ReapOutcome::Empty);
    }

    for disk in &disks {
        cli.delete_disk(project, disk.short_zone(), &disk.name)?;
    }
    info!(deleted = disks.len(), "unused disk sweep finished");
    Ok(ReapOutcome::Deleted(disks.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedDiskCli;

    #[test]
    fn empty_listing_deletes_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cli = ScriptedDiskCli::new("[]");

        let outcome = run_reap(temp.path(), &cli, "proj").expect("reap");

        assert_eq!(outcome, ReapOutcome::Empty);
        assert!(cli.deleted().is_empty());
    }

    #[test]
    fn deletes_each_disk_with_short_zone() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cli = ScriptedDiskCli::new(
            r#"[{"name":"d1","zone":"projects/p/zones/us-central1-a"},
                {"name":"d2","zone":"projects/p/zones/europe-west1-b"}]"#,
        );

        let outcome = run_reap(temp.path(), &cli, "proj").expect("reap");

        assert_eq!(outcome, ReapOutcome::Deleted(2));
        let deleted = cli.deleted();
        assert_eq!(deleted.len(), 2);
        assert_eq!(deleted[0].project, "proj");
        assert_eq!(deleted[0].zone, "us-central1-a");
        assert_eq!(deleted[0].name, "d1");
        assert_eq!(deleted[1].zone, "europe-west1-b");
        assert_eq!(deleted[1].name, "d2");
    }

    #[test]
    fn unparseable_listing_carries_raw_content() {
        let temp = tempfile::tempdir().expect("tempdir");
        let raw = "ERROR: quota exceeded";
        let cli = ScriptedDiskCli::new(raw);

        let outcome = run_reap(temp.path(), &cli, "proj").expect("reap");

        assert_eq!(outcome, ReapOutcome::Unparseable(raw.to_string()));
        assert!(cli.deleted().is_empty());
    }

    #[test]
    fn listing_file_is_left_behind() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cli = ScriptedDiskCli::new("[]");

        run_reap(temp.path(), &cli, "proj").expect("reap");

        let listing = fs::read_to_string(temp.path().join(LISTING_FILE)).expect("listing");
        assert_eq!(listing, "[]");
    }
}
