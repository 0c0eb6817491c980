//! Parsing for the unused-disk listing produced by `gcloud`.
//!
//! The listing command emits a JSON array of disk objects. Only `name` and
//! `zone` matter here; everything else gcloud includes is ignored. A listing
//! that is not valid JSON is never an error: the raw content is preserved so
//! the caller can report it verbatim.

use serde::Deserialize;

/// One disk from the listing. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiskDescriptor {
    pub name: String,
    /// Zone as gcloud reports it, usually a URL-like path
    /// (`.../projects/<p>/zones/<zone>`).
    pub zone: String,
}

impl DiskDescriptor {
    /// Short zone name: the final `/`-separated segment of [`Self::zone`].
    ///
    /// A zone with no separator is already short and is returned as-is.
    pub fn short_zone(&self) -> &str {
        match self.zone.rsplit_once('/') {
            Some((_, short)) => short,
            None => &self.zone,
        }
    }
}

/// Result of interpreting the raw listing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiskListing {
    /// Valid JSON array of disks (possibly empty).
    Disks(Vec<DiskDescriptor>),
    /// Content was not a JSON array of disks; carries the raw text.
    Unparseable(String),
}

/// Parse the listing file content.
pub fn parse_disk_listing(raw: &str) -> DiskListing {
    match serde_json::from_str::<Vec<DiskDescriptor>>(raw) {
        Ok(disks) => DiskListing::Disks(disks),
        Err(_) => DiskListing::Unparseable(raw.to_string()),
    }
}
