/// Analysis over the scanned record set: classification, duplicate
/// detection and per-directory storage stats.

pub mod classify;
pub mod duplicates;
pub mod stats;

pub use classify::classify;
pub use duplicates::{find_duplicates, DuplicateEntry};
pub use stats::{aggregate, volume_anchor, MediaDirStats, StorageBreakdown};
