/// Scan configuration passed explicitly into the scanner.
///
/// Replaces an implicit working-directory root and a global extension list
/// with a single value the caller owns.
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// File name the report is written to when no output path is given.
pub const DEFAULT_REPORT_FILE: &str = "nas-stats.json";

/// Extensions collected when the caller does not supply its own set.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".mp4", ".mkv", ".mp3", ".flac", ".jpg", ".png"];

/// Directory-name prefix that marks a media collection.
pub const MEDIA_DIR_PREFIX: &str = "Media";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory the walk starts from.
    pub root: PathBuf,
    /// Lower-case extensions including the leading dot, e.g. `.mkv`.
    pub valid_extensions: BTreeSet<String>,
}

impl ScanConfig {
    /// Config rooted at `root` with the default extension set.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            valid_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Config rooted at the process working directory.
    pub fn current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        Ok(Self::new(cwd))
    }

    /// Replace the extension set. Entries are lower-cased and given a
    /// leading dot if they lack one; empty entries are dropped.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.valid_extensions = extensions
            .into_iter()
            .filter_map(|e| normalise_extension(e.as_ref()))
            .collect();
        self
    }

    /// `true` if `file_name`, lower-cased, ends with a configured extension.
    pub fn accepts(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.valid_extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn normalise_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extension_set() {
        let cfg = ScanConfig::new("/srv");
        assert_eq!(cfg.valid_extensions.len(), 6);
        for ext in DEFAULT_EXTENSIONS {
            assert!(cfg.valid_extensions.contains(*ext), "missing {ext}");
        }
    }

    #[test]
    fn accepts_is_case_insensitive() {
        let cfg = ScanConfig::new("/srv");
        assert!(cfg.accepts("Holiday.JPG"));
        assert!(cfg.accepts("film.Mkv"));
        assert!(!cfg.accepts("notes.txt"));
        assert!(!cfg.accepts("mp4"));
    }

    #[test]
    fn with_extensions_normalises_entries() {
        let cfg = ScanConfig::new("/srv").with_extensions(["MOV", ".Avi", "", "  .webm "]);
        let exts: Vec<&str> = cfg.valid_extensions.iter().map(String::as_str).collect();
        assert_eq!(exts, vec![".avi", ".mov", ".webm"]);
        assert!(cfg.accepts("clip.MOV"));
        assert!(!cfg.accepts("song.mp3"));
    }
}
