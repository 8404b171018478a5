/// nasstats Core — scanning, classification, aggregation and reporting.
///
/// This crate contains all business logic with no console I/O.
/// The `nasstats` binary is a thin wrapper around [`pipeline::run`].
///
/// # Modules
///
/// - [`config`] — Explicit scan configuration (root + extension set).
/// - [`model`] — `MediaRecord`, `MediaType` and size helpers.
/// - [`scanner`] — Serial directory walk producing media records.
/// - [`analysis`] — Classifier, duplicate detector and per-directory stats.
/// - [`platform`] — Volume capacity / free-space probe.
/// - [`report`] — The JSON report: build, write, load and maintain.
/// - [`pipeline`] — One-call scan → analyse → write.
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod platform;
pub mod report;
pub mod scanner;

pub use config::{ScanConfig, DEFAULT_REPORT_FILE};
pub use error::{Error, Result};
pub use pipeline::{run, RunOutcome, Stage};
