/// Capacity and free-space query for the volume holding a path.
///
/// Unix uses `statvfs`, Windows uses `GetDiskFreeSpaceExW`. Free space is
/// the amount available to the calling user, not the raw free block count.
use std::io;
use std::path::Path;

/// Capacity and free space of one volume, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VolumeUsage {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

/// Source of volume figures. The stats aggregator takes this instead of
/// calling the OS directly so aggregation can be tested with fixed numbers.
pub trait VolumeProbe {
    fn usage(&self, path: &Path) -> io::Result<VolumeUsage>;
}

/// Queries the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemVolumes;

impl VolumeProbe for SystemVolumes {
    fn usage(&self, path: &Path) -> io::Result<VolumeUsage> {
        query_volume(path)
    }
}

/// Query the volume containing `path`.
///
/// Fails with `NotFound` if `path` does not exist.
pub fn query_volume(path: &Path) -> io::Result<VolumeUsage> {
    // Missing anchors surface as NotFound on every platform.
    std::fs::metadata(path)?;
    sys::query(path)
}

#[cfg(unix)]
mod sys {
    use super::VolumeUsage;
    use std::ffi::CString;
    use std::io;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    pub(super) fn query(path: &Path) -> io::Result<VolumeUsage> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let mut stat: MaybeUninit<libc::statvfs> = MaybeUninit::uninit();
        // SAFETY: `c_path` is NUL-terminated and `stat` is a valid out-pointer.
        let rc = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: statvfs returned 0, so the struct is initialised.
        let stat = unsafe { stat.assume_init() };

        let frsize = stat.f_frsize as u64;
        Ok(VolumeUsage {
            total_bytes: (stat.f_blocks as u64).saturating_mul(frsize),
            free_bytes: (stat.f_bavail as u64).saturating_mul(frsize),
        })
    }
}

#[cfg(windows)]
mod sys {
    use super::VolumeUsage;
    use std::io;
    use std::os::windows::ffi::OsStrExt;
    use std::path::Path;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

    pub(super) fn query(path: &Path) -> io::Result<VolumeUsage> {
        let wide: Vec<u16> = path
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();
        let pcwstr = windows::core::PCWSTR(wide.as_ptr());

        let mut free_caller: u64 = 0;
        let mut total: u64 = 0;
        let mut free_total: u64 = 0;
        // SAFETY: `wide` is NUL-terminated and outlives the call.
        unsafe {
            GetDiskFreeSpaceExW(
                pcwstr,
                Some(&mut free_caller as *mut u64),
                Some(&mut total as *mut u64),
                Some(&mut free_total as *mut u64),
            )
        }
        .map_err(io::Error::other)?;

        Ok(VolumeUsage {
            total_bytes: total,
            free_bytes: free_caller,
        })
    }
}

#[cfg(not(any(unix, windows)))]
mod sys {
    use super::VolumeUsage;
    use std::io;
    use std::path::Path;

    pub(super) fn query(_path: &Path) -> io::Result<VolumeUsage> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "volume queries are not supported on this platform",
        ))
    }
}
