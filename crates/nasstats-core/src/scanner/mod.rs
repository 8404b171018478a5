/// Scanner module — walks the tree and builds `MediaRecord`s.
///
/// The walk is single-threaded and deterministic: inside each directory,
/// files are visited before subdirectories and both are sorted by name.
/// Re-scanning an unchanged tree yields records in the same order.
pub mod walk;

use crate::config::{ScanConfig, MEDIA_DIR_PREFIX};
use crate::model::MediaRecord;
use compact_str::CompactString;
use std::path::{Component, Path};
use std::time::Duration;

pub use walk::scan;

/// Result of a scan.
///
/// "No Media directory anywhere" and "Media directories but no qualifying
/// files" are different outcomes: the first usually means the tool was run
/// from the wrong place.
#[derive(Debug)]
pub enum ScanOutcome {
    /// No visited directory had a `Media*` component in its path.
    NoMediaDirectories,
    /// At least one Media directory was visited. `records` may be empty.
    Scanned(ScanResult),
}

#[derive(Debug, Default)]
pub struct ScanResult {
    /// Qualifying files in discovery order.
    pub records: Vec<MediaRecord>,
    /// Qualifying files whose metadata could not be read.
    pub skipped: u64,
    /// Directories or entries the walker could not read.
    pub walk_errors: u64,
    pub duration: Duration,
}

/// Shallowest component of `dir` whose name starts with `Media`.
pub fn media_dir_of(dir: &Path) -> Option<CompactString> {
    dir.components().find_map(|component| match component {
        Component::Normal(name) => {
            let name = name.to_string_lossy();
            name.starts_with(MEDIA_DIR_PREFIX)
                .then(|| CompactString::new(name.as_ref()))
        }
        _ => None,
    })
}

/// Convenience: scan with the default extension set.
pub fn scan_dir(root: &Path) -> crate::Result<ScanOutcome> {
    scan(&ScanConfig::new(root))
}
