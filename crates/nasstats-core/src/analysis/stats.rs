/// Per-`Media*` directory storage statistics.
///
/// Counts and GiB size sums per media type, plus the capacity and free space
/// of the volume each media directory lives on. The volume is queried once
/// per directory, not once per file.
use crate::config::MEDIA_DIR_PREFIX;
use crate::error::{Error, Result};
use crate::model::size::bytes_to_gib;
use crate::model::{MediaRecord, MediaType};
use crate::platform::VolumeProbe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stats for one media directory. Field names are the report's JSON keys.
/// Every `*_size`, `drive_capacity` and `free_space` value is in GiB.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaDirStats {
    pub movies: u64,
    pub tv_shows: u64,
    pub music: u64,
    pub photos: u64,
    pub movies_size: f64,
    pub tv_shows_size: f64,
    pub music_size: f64,
    pub photos_size: f64,
    /// Includes files classified as `Unknown`.
    pub total_size: f64,
    pub drive_capacity: f64,
    pub free_space: f64,
}

impl MediaDirStats {
    /// Add one record's count and size.
    pub fn add(&mut self, record: &MediaRecord) {
        let gib = bytes_to_gib(record.size_bytes);
        match record.media_type {
            MediaType::Movie => {
                self.movies += 1;
                self.movies_size += gib;
            }
            MediaType::TvShow => {
                self.tv_shows += 1;
                self.tv_shows_size += gib;
            }
            MediaType::Music => {
                self.music += 1;
                self.music_size += gib;
            }
            MediaType::Photo => {
                self.photos += 1;
                self.photos_size += gib;
            }
            MediaType::Unknown => {}
        }
        self.total_size += gib;
    }
}

/// Stats keyed by media directory name, sorted for stable output.
pub type StorageBreakdown = BTreeMap<String, MediaDirStats>;

/// Build one `MediaDirStats` per distinct `media_dir`.
///
/// The volume anchor for a directory is resolved from the first record seen
/// for it. Any probe failure aborts the whole aggregation.
pub fn aggregate(records: &[MediaRecord], probe: &dyn VolumeProbe) -> Result<StorageBreakdown> {
    let mut breakdown = StorageBreakdown::new();
    let mut anchors: BTreeMap<String, PathBuf> = BTreeMap::new();

    for record in records {
        let key = record.media_dir.as_str();
        if !anchors.contains_key(key) {
            anchors.insert(key.to_string(), volume_anchor(record.container())?);
        }
        breakdown.entry(key.to_string()).or_default().add(record);
    }

    for (media_dir, anchor) in &anchors {
        let usage = probe.usage(anchor).map_err(|source| Error::Volume {
            path: anchor.clone(),
            source,
        })?;
        debug!(
            "Volume for {media_dir} at {}: {} total, {} free",
            anchor.display(),
            usage.total_bytes,
            usage.free_bytes
        );
        if let Some(stats) = breakdown.get_mut(media_dir) {
            stats.drive_capacity = bytes_to_gib(usage.total_bytes);
            stats.free_space = bytes_to_gib(usage.free_bytes);
        }
    }

    Ok(breakdown)
}

/// Walk upward from `container` to the nearest directory whose name starts
/// with `Media`. That directory is queried for volume figures.
pub fn volume_anchor(container: &Path) -> Result<PathBuf> {
    let mut current = container;
    loop {
        let is_media = current
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with(MEDIA_DIR_PREFIX));
        if is_media {
            return Ok(current.to_path_buf());
        }
        current = current.parent().ok_or_else(|| Error::NoMediaAncestor {
            path: container.to_path_buf(),
        })?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::VolumeUsage;
    use compact_str::CompactString;
    use std::cell::RefCell;
    use std::io;

    const GIB_BYTES: u64 = 1024 * 1024 * 1024;

    /// Fixed capacity probe that records every path it is asked about.
    #[derive(Default)]
    struct FixedProbe {
        calls: RefCell<Vec<PathBuf>>,
    }

    impl VolumeProbe for FixedProbe {
        fn usage(&self, path: &Path) -> io::Result<VolumeUsage> {
            self.calls.borrow_mut().push(path.to_path_buf());
            Ok(VolumeUsage {
                total_bytes: 1000 * GIB_BYTES,
                free_bytes: 250 * GIB_BYTES,
            })
        }
    }

    struct FailingProbe;

    impl VolumeProbe for FailingProbe {
        fn usage(&self, _path: &Path) -> io::Result<VolumeUsage> {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        }
    }

    fn record(path: &str, media_dir: &str, size: u64, media_type: MediaType) -> MediaRecord {
        MediaRecord {
            location: PathBuf::from(path),
            name: CompactString::new("x"),
            media_dir: CompactString::new(media_dir),
            size_bytes: size,
            media_type,
        }
    }

    #[test]
    fn sums_are_in_gib_per_type() {
        let records = vec![
            record("/nas/Media1/Movies/a.mkv", "Media1", 2 * GIB_BYTES, MediaType::Movie),
            record("/nas/Media1/Music/b.mp3", "Media1", GIB_BYTES, MediaType::Music),
        ];
        let probe = FixedProbe::default();
        let breakdown = aggregate(&records, &probe).unwrap();

        let stats = &breakdown["Media1"];
        assert_eq!(stats.movies, 1);
        assert_eq!(stats.music, 1);
        assert!((stats.movies_size - 2.0).abs() < 1e-9);
        assert!((stats.music_size - 1.0).abs() < 1e-9);
        assert!((stats.total_size - 3.0).abs() < 1e-9);
        assert!((stats.drive_capacity - 1000.0).abs() < 1e-9);
        assert!((stats.free_space - 250.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_counts_towards_total_only() {
        let records = vec![record(
            "/nas/Media1/misc/clip.webm",
            "Media1",
            GIB_BYTES,
            MediaType::Unknown,
        )];
        let breakdown = aggregate(&records, &FixedProbe::default()).unwrap();
        let stats = &breakdown["Media1"];
        assert_eq!(
            (stats.movies, stats.tv_shows, stats.music, stats.photos),
            (0, 0, 0, 0)
        );
        assert!((stats.total_size - 1.0).abs() < 1e-9);
    }

    /// One probe call per media directory, anchored at the Media directory
    /// itself rather than the file's folder.
    #[test]
    fn probe_called_once_per_media_dir() {
        let records = vec![
            record("/nas/Media1/Movies/a.mkv", "Media1", 1, MediaType::Movie),
            record("/nas/Media1/Movies/b.mkv", "Media1", 1, MediaType::Movie),
            record("/nas/Media2/Photos/c.jpg", "Media2", 1, MediaType::Photo),
        ];
        let probe = FixedProbe::default();
        let breakdown = aggregate(&records, &probe).unwrap();

        assert_eq!(breakdown.len(), 2);
        let calls = probe.calls.borrow();
        assert_eq!(
            *calls,
            vec![PathBuf::from("/nas/Media1"), PathBuf::from("/nas/Media2")]
        );
    }

    #[test]
    fn probe_failure_is_fatal() {
        let records = vec![record("/nas/Media1/a.mkv", "Media1", 1, MediaType::Movie)];
        let err = aggregate(&records, &FailingProbe).unwrap_err();
        match err {
            Error::Volume { path, .. } => assert_eq!(path, PathBuf::from("/nas/Media1")),
            other => panic!("expected Volume error, got {other:?}"),
        }
    }

    #[test]
    fn anchor_is_nearest_media_ancestor() {
        assert_eq!(
            volume_anchor(Path::new("/nas/Media1/Movies/Sci-Fi")).unwrap(),
            PathBuf::from("/nas/Media1")
        );
        assert_eq!(
            volume_anchor(Path::new("/nas/MediaArchive")).unwrap(),
            PathBuf::from("/nas/MediaArchive")
        );
        assert_eq!(
            volume_anchor(Path::new("/Media1/sub/MediaInner/x")).unwrap(),
            PathBuf::from("/Media1/sub/MediaInner")
        );
    }

    #[test]
    fn anchor_without_media_ancestor_errors() {
        let err = volume_anchor(Path::new("/srv/films")).unwrap_err();
        assert!(matches!(err, Error::NoMediaAncestor { .. }));
    }

    #[test]
    fn empty_input_gives_empty_breakdown() {
        let breakdown = aggregate(&[], &FixedProbe::default()).unwrap();
        assert!(breakdown.is_empty());
    }
}
