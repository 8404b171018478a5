/// Error type shared by every fallible operation in the core crate.
///
/// Empty scan results are not errors; they are reported through
/// [`crate::scanner::ScanOutcome`] and [`crate::pipeline::RunOutcome`].
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Capacity / free-space query for a media directory's volume failed.
    #[error("failed to query volume for {}: {source}", .path.display())]
    Volume {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking upward from a record never reached a `Media*` directory.
    #[error("no Media directory above {}", .path.display())]
    NoMediaAncestor { path: PathBuf },

    /// The report could not be serialised or parsed.
    #[error("invalid report JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
