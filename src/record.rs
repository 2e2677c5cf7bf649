//! File record type
//!
//! One `FileRecord` per regular file encountered during the walk, shaped
//! for bulk transfer into the `files` table.

use crate::stat::{unix_seconds, StatusTimeProvider};
use std::fs::Metadata;
use std::path::Path;

/// Metadata for one regular file, captured at the instant it was statted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Full traversal path as encountered (not canonicalized)
    pub filepath: String,

    /// Base name component
    pub filename: String,

    /// Byte length at time of scan
    pub size: u64,

    /// Last-modification time (Unix seconds)
    pub modified_time: i64,

    /// Status-change time, or the modification time when the platform
    /// exposes nothing better
    pub created_time: i64,
}

impl FileRecord {
    /// Build a record from a path and its metadata
    ///
    /// Fails only when the platform cannot report a modification time
    /// for the file.
    pub fn from_metadata(
        path: &Path,
        meta: &Metadata,
        times: &dyn StatusTimeProvider,
    ) -> std::io::Result<Self> {
        let modified_time = unix_seconds(meta.modified()?);
        let created_time = times.status_time(meta).unwrap_or(modified_time);

        let filename = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();

        Ok(Self {
            filepath: path.to_string_lossy().into_owned(),
            filename,
            size: meta.len(),
            modified_time,
            created_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::ModifiedTimeOnly;
    use std::fs;

    #[test]
    fn test_record_fields() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.bin");
        fs::write(&file, vec![0u8; 42]).unwrap();

        let meta = fs::metadata(&file).unwrap();
        let record = FileRecord::from_metadata(&file, &meta, &ModifiedTimeOnly).unwrap();

        assert_eq!(record.filename, "data.bin");
        assert_eq!(record.size, 42);
        assert!(record.filepath.ends_with("data.bin"));
    }

    #[test]
    fn test_fallback_created_equals_modified() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"x").unwrap();

        let meta = fs::metadata(&file).unwrap();
        let record = FileRecord::from_metadata(&file, &meta, &ModifiedTimeOnly).unwrap();

        assert_eq!(record.created_time, record.modified_time);
    }

    #[cfg(unix)]
    #[test]
    fn test_native_created_time_populated() {
        use crate::stat::NativeStatusTime;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"x").unwrap();

        let meta = fs::metadata(&file).unwrap();
        let record = FileRecord::from_metadata(&file, &meta, &NativeStatusTime).unwrap();

        // ctime of a freshly created file is close to its mtime
        assert!((record.created_time - record.modified_time).abs() <= 2);
    }
}
