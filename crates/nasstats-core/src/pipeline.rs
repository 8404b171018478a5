/// End-to-end run: scan → duplicates → stats → report.
///
/// Duplicate detection and aggregation both read the full record set; the
/// report merges their outputs. Nothing is written for the two empty
/// outcomes.
use crate::analysis::{aggregate, find_duplicates};
use crate::config::ScanConfig;
use crate::error::Result;
use crate::platform::VolumeProbe;
use crate::report::Report;
use crate::scanner::{scan, ScanOutcome};
use std::path::{Path, PathBuf};
use tracing::info;

/// Pipeline stage announced to the caller before it starts.
#[derive(Debug, Clone, Copy)]
pub enum Stage<'a> {
    Scanning { root: &'a Path },
    Writing { output: &'a Path },
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No `Media*` directory under the root. No report written.
    NoMediaDirectories,
    /// Media directories exist but hold no qualifying files. No report written.
    NoMediaFiles,
    /// The report was written to `output`.
    Written {
        output: PathBuf,
        total_files: u64,
        total_bytes: u64,
        duplicates: usize,
        skipped: u64,
        /// Directories or entries the walker could not read.
        walk_errors: u64,
    },
}

/// Scan `config.root`, analyse the records and write the report to `output`.
pub fn run(
    config: &ScanConfig,
    output: &Path,
    probe: &dyn VolumeProbe,
    on_stage: &dyn Fn(Stage<'_>),
) -> Result<RunOutcome> {
    on_stage(Stage::Scanning { root: config.root() });
    let result = match scan(config)? {
        ScanOutcome::NoMediaDirectories => return Ok(RunOutcome::NoMediaDirectories),
        ScanOutcome::Scanned(result) => result,
    };
    if result.records.is_empty() {
        return Ok(RunOutcome::NoMediaFiles);
    }

    let records = &result.records;
    let duplicates = find_duplicates(records);
    let breakdown = aggregate(records, probe)?;
    info!(
        "{} records across {} media directories, {} duplicate names",
        records.len(),
        breakdown.len(),
        duplicates.len()
    );

    let total_files = records.len() as u64;
    let report = Report::new(&duplicates, breakdown, total_files);
    on_stage(Stage::Writing { output });
    report.save(output)?;

    Ok(RunOutcome::Written {
        output: output.to_path_buf(),
        total_files,
        total_bytes: records.iter().map(|r| r.size_bytes).sum(),
        duplicates: duplicates.len(),
        skipped: result.skipped,
        walk_errors: result.walk_errors,
    })
}
