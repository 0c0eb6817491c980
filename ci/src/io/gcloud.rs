//! gcloud adapter for the disk reaper.
//!
//! The reaper needs exactly two operations, kept behind the [`DiskCli`]
//! trait so the listing/deletion logic can be exercised with scripted fakes
//! instead of a real cloud project.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

/// Name of the file the listing output is written to, relative to the
/// working directory. Overwritten each run, never cleaned up.
pub const LISTING_FILE: &str = "unused_disks.json";

/// External CLI surface used by the reaper.
pub trait DiskCli {
    /// List disks in `project` with no attached users, writing the JSON
    /// output to `out_path`.
    fn list_unused_disks(&self, project: &str, out_path: &Path) -> Result<()>;

    /// Delete one disk, suppressing interactive confirmation. The command's
    /// exit status does not affect control flow.
    fn delete_disk(&self, project: &str, zone: &str, name: &str) -> Result<()>;
}

/// [`DiskCli`] backed by the real `gcloud` binary.
pub struct GcloudCli;

impl DiskCli for GcloudCli {
    #[instrument(skip_all, fields(project))]
    fn list_unused_disks(&self, project: &str, out_path: &Path) -> Result<()> {
        let output = run_gcloud(&[
            "compute",
            "disks",
            "list",
            "--filter=-users:*",
            "--format=json",
            "--project",
            project,
        ])?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(exit_code = ?output.status.code(), stderr = %stderr.trim(), "disk listing returned non-zero");
        }
        fs::write(out_path, &output.stdout)
            .with_context(|| format!("write {}", out_path.display()))?;
        Ok(())
    }

    #[instrument(skip_all, fields(name, zone))]
    fn delete_disk(&self, project: &str, zone: &str, name: &str) -> Result<()> {
        let output = run_gcloud(&[
            "compute",
            "disks",
            "delete",
            name,
            "--zone",
            zone,
            "--project",
            project,
            "--quiet",
        ])?;
        // Deletions are independent; a failed one is logged and skipped.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(exit_code = ?output.status.code(), stderr = %stderr.trim(), "disk deletion returned non-zero");
        }
        Ok(())
    }
}

fn run_gcloud(args: &[&str]) -> Result<Output> {
    debug!(args = ?args, "running gcloud");
    Command::new("gcloud")
        .args(args)
        .output()
        .with_context(|| format!("spawn gcloud {}", args.join(" ")))
}
