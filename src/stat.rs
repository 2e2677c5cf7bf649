//! Timestamp extraction from filesystem metadata
//!
//! SQLite rows store a `created_time`, but Linux-family systems expose no
//! universal birth time through the standard stat call. The accepted proxy
//! is the status-change time (ctime), which reflects the last change to
//! the inode rather than the content. This module abstracts that choice
//! behind a small capability trait so platforms without a native ctime
//! fall back to the modification time.

use std::fs::Metadata;
use std::time::{SystemTime, UNIX_EPOCH};

/// Provides a best-effort "creation" timestamp for a file
///
/// Implementations return `None` when the platform offers nothing better
/// than the modification time; callers then reuse `modified_time` for
/// both columns.
pub trait StatusTimeProvider {
    /// Status-change time as Unix seconds, if the platform exposes one
    fn status_time(&self, meta: &Metadata) -> Option<i64>;
}

/// Unix implementation reading ctime from the stat structure
///
/// Note: ctime is a status-change time, not a true creation time. It is
/// an approximation and documented as such.
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeStatusTime;

#[cfg(unix)]
impl StatusTimeProvider for NativeStatusTime {
    fn status_time(&self, meta: &Metadata) -> Option<i64> {
        use std::os::unix::fs::MetadataExt;
        Some(meta.ctime())
    }
}

/// Fallback for platforms without an accessible status-change time
#[derive(Debug, Default, Clone, Copy)]
pub struct ModifiedTimeOnly;

impl StatusTimeProvider for ModifiedTimeOnly {
    fn status_time(&self, _meta: &Metadata) -> Option<i64> {
        None
    }
}

/// The provider for the current platform
pub fn platform_provider() -> Box<dyn StatusTimeProvider> {
    #[cfg(unix)]
    {
        Box::new(NativeStatusTime)
    }
    #[cfg(not(unix))]
    {
        Box::new(ModifiedTimeOnly)
    }
}

/// Convert a `SystemTime` to Unix seconds (negative for pre-epoch times)
pub fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unix_seconds_epoch() {
        assert_eq!(unix_seconds(UNIX_EPOCH), 0);
        assert_eq!(unix_seconds(UNIX_EPOCH + Duration::from_secs(1234)), 1234);
    }

    #[test]
    fn test_fallback_provider_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"x").unwrap();
        let meta = std::fs::metadata(&file).unwrap();

        assert_eq!(ModifiedTimeOnly.status_time(&meta), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_native_provider_returns_ctime() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"x").unwrap();
        let meta = std::fs::metadata(&file).unwrap();

        let ctime = NativeStatusTime.status_time(&meta);
        assert!(ctime.is_some());
        // A file created just now has a recent ctime
        assert!(ctime.unwrap() > 0);
    }
}
