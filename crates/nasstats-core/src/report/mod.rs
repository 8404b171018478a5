/// The `nas-stats.json` report.
///
/// A report is built from the scanned records, the duplicate pairs and the
/// storage breakdown, then written as pretty-printed UTF-8 JSON. Existing
/// reports can be loaded back and edited, e.g. to forget a duplicate that
/// has since been deleted.
use crate::analysis::{DuplicateEntry, StorageBreakdown};
use crate::error::{Error, Result};
use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One duplicate name with the locations that share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub name: String,
    /// `[first_seen, later]` when freshly generated.
    pub locations: Vec<String>,
}

impl From<&DuplicateEntry<'_>> for DuplicateGroup {
    fn from(entry: &DuplicateEntry<'_>) -> Self {
        Self {
            name: entry.name.to_string(),
            locations: vec![entry.first.location_str(), entry.duplicate.location_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub duplicates: Vec<DuplicateGroup>,
    pub storage_breakdown: StorageBreakdown,
    /// Every scanned record, duplicates included.
    pub total_files: u64,
    /// Local time the report was built, ISO-8601.
    pub generated_on: String,
}

impl Report {
    /// Assemble a report stamped with the current local time.
    pub fn new(
        duplicates: &[DuplicateEntry<'_>],
        storage_breakdown: StorageBreakdown,
        total_files: u64,
    ) -> Self {
        Self {
            duplicates: duplicates.iter().map(DuplicateGroup::from).collect(),
            storage_breakdown,
            total_files,
            generated_on: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }

    /// Serialise to pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the report to `path`, replacing any existing file.
    ///
    /// The JSON is produced in memory first, so a serialisation failure
    /// leaves an existing file untouched.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json().map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|e| Error::io(path, e))?;
        info!(
            "Report written to {} ({} files, {} duplicates)",
            path.display(),
            self.total_files,
            self.duplicates.len()
        );
        Ok(())
    }

    /// Read a previously written report.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Drop `location` from every duplicate group. Groups left with fewer
    /// than two locations are removed entirely.
    ///
    /// Returns the number of groups that were changed or removed.
    pub fn forget_location(&mut self, location: &str) -> usize {
        let mut touched = 0;
        self.duplicates.retain_mut(|group| {
            let before = group.locations.len();
            group.locations.retain(|loc| loc != location);
            if group.locations.len() != before {
                touched += 1;
            }
            group.locations.len() >= 2
        });
        touched
    }
}
