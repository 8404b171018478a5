/// A single media file discovered by the scanner.
///
/// Records are built once during the walk and never mutated afterwards.
/// Sizes stay in bytes here; GiB conversion happens during aggregation.
use compact_str::CompactString;
use std::path::{Path, PathBuf};

/// Media type assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Movie,
    TvShow,
    Music,
    Photo,
    Unknown,
}

impl MediaType {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
            Self::Music => "Music",
            Self::Photo => "Photo",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaRecord {
    /// Absolute path of the file. Unique per record.
    pub location: PathBuf,

    /// File name with only the final extension stripped.
    /// Duplicate detection keys on this; it is not unique.
    pub name: CompactString,

    /// Shallowest `Media*` component of the containing directory's path.
    pub media_dir: CompactString,

    /// Size at scan time.
    pub size_bytes: u64,

    pub media_type: MediaType,
}

impl MediaRecord {
    /// Directory that contains this file.
    pub fn container(&self) -> &Path {
        self.location.parent().unwrap_or(&self.location)
    }

    /// Location as a display string (lossy for non-UTF-8 paths).
    pub fn location_str(&self) -> String {
        self.location.to_string_lossy().into_owned()
    }
}

/// Strip the final extension from a file name.
///
/// `movie.part1.mkv` → `movie.part1`. Leading dots never start an
/// extension, so `.mp4` and `..mp4` are returned unchanged.
pub fn base_name(file_name: &str) -> &str {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(dot) => &file_name[..stem_start + dot],
        None => file_name,
    }
}
