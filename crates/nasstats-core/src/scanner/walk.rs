/// Directory walker using `jwalk` in serial mode.
///
/// `process_read_dir` reorders each directory's children so files come
/// before subdirectories, both sorted by name. Combined with jwalk's
/// depth-first iteration this gives a top-down, stable discovery order.
use crate::analysis::classify;
use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::model::media_record::base_name;
use crate::model::MediaRecord;
use crate::scanner::{media_dir_of, ScanOutcome, ScanResult};
use compact_str::CompactString;
use std::cmp::Ordering;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Walk `config.root` and collect every qualifying file under a Media
/// directory.
///
/// Unreadable files are skipped and counted; unreadable directories are
/// logged and skipped. Only a missing or unreadable root is an error.
pub fn scan(config: &ScanConfig) -> Result<ScanOutcome> {
    let start = Instant::now();
    let root = std::path::absolute(&config.root).map_err(|e| Error::io(&config.root, e))?;
    std::fs::metadata(&root).map_err(|e| Error::io(&root, e))?;

    info!("Starting scan of {}", root.display());

    let walker = jwalk::WalkDir::new(&root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial)
        .process_read_dir(|_depth, _path, _state, children| {
            children.sort_by(|a, b| match (a, b) {
                (Ok(a), Ok(b)) => a
                    .file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name())),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => Ordering::Equal,
            });
        });

    let mut result = ScanResult::default();
    let mut saw_media_dir = false;
    let mut dirs_found: u64 = 0;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                result.walk_errors += 1;
                let err_path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!("Skipping unreadable entry {err_path}: {err}");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            dirs_found += 1;
            if !saw_media_dir && media_dir_of(&entry.path()).is_some() {
                saw_media_dir = true;
            }
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !config.accepts(&file_name) {
            continue;
        }

        let path = entry.path();
        let Some(container) = path.parent() else {
            continue;
        };
        let Some(media_dir) = media_dir_of(container) else {
            continue;
        };

        if let Some(record) = build_record(&path, container, &file_name, media_dir, &mut result) {
            debug!(
                "{} [{}] {} bytes",
                record.location.display(),
                record.media_type.label(),
                record.size_bytes
            );
            result.records.push(record);
        }
    }

    result.duration = start.elapsed();
    info!(
        "Scan complete: {} media files, {} dirs, {} skipped, {} walk errors in {:?}",
        result.records.len(),
        dirs_found,
        result.skipped,
        result.walk_errors,
        result.duration
    );

    if !saw_media_dir {
        return Ok(ScanOutcome::NoMediaDirectories);
    }
    Ok(ScanOutcome::Scanned(result))
}

fn build_record(
    path: &Path,
    container: &Path,
    file_name: &str,
    media_dir: CompactString,
    result: &mut ScanResult,
) -> Option<MediaRecord> {
    // Follows symlinks, so a dangling link is skipped here.
    let size_bytes = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) => {
            result.skipped += 1;
            warn!("Skipping {}: {err}", path.display());
            return None;
        }
    };

    let media_type = classify(&container.to_string_lossy(), file_name);

    Some(MediaRecord {
        location: path.to_path_buf(),
        name: CompactString::new(base_name(file_name)),
        media_dir,
        size_bytes,
        media_type,
    })
}
