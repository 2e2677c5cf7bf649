//! Single-pass directory walker feeding the batched writer
//!
//! Traversal is depth-first in directory-entry order as returned by the
//! OS (no sorting; insertion order is visible through the auto-increment
//! id). Symlinks are not followed. Directories produce no record and are
//! only traversal continuation points.
//!
//! The whole walk runs inside the writer's batch transaction, so with the
//! default settings an error anywhere rolls back every record from this
//! invocation.

use crate::config::{ErrorPolicy, ScanConfig};
use crate::db::writer::RecordWriter;
use crate::error::{Result, WalkError};
use crate::record::FileRecord;
use crate::stat;
use rusqlite::Connection;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Result of a completed scan
#[derive(Debug, Default)]
pub struct ScanStats {
    /// Records inserted (and committed)
    pub files: u64,

    /// Sum of recorded file sizes
    pub bytes: u64,

    /// Entries passed over under the skip/collect policies
    pub skipped: u64,

    /// Errors gathered under `ErrorPolicy::Collect`
    pub errors: Vec<WalkError>,

    /// Wall-clock duration of the walk
    pub duration: Duration,
}

impl ScanStats {
    /// Files recorded per second
    pub fn files_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.files as f64 / secs
        } else {
            0.0
        }
    }
}

/// Walk `config.source` and insert one record per regular file
///
/// The store must already be open and initialized. Error handling follows
/// `config.error_policy`: the default aborts on the first inaccessible
/// path, which rolls back the transaction and leaves the store untouched
/// by this invocation.
pub fn scan(conn: &Connection, config: &ScanConfig) -> Result<ScanStats> {
    let start = Instant::now();
    let times = stat::platform_provider();

    let mut stats = ScanStats::default();
    let mut writer = RecordWriter::begin(conn, config.batch_size)?;

    info!(source = %config.source.display(), "starting scan");

    for entry in WalkDir::new(&config.source) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                note_error(config.error_policy, e.into(), &mut stats)?;
                continue;
            }
        };

        // Directories and non-regular entries contribute no records
        if !entry.file_type().is_file() {
            continue;
        }

        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(e) => {
                note_error(config.error_policy, e.into(), &mut stats)?;
                continue;
            }
        };

        let record = match FileRecord::from_metadata(entry.path(), &meta, times.as_ref()) {
            Ok(record) => record,
            Err(e) => {
                note_error(
                    config.error_policy,
                    WalkError::access(entry.path(), e),
                    &mut stats,
                )?;
                continue;
            }
        };

        debug!(file = %record.filepath, size = record.size, "recording");

        writer.insert(&record)?;
        stats.files += 1;
        stats.bytes += record.size;
    }

    writer.finish()?;
    stats.duration = start.elapsed();

    info!(
        files = stats.files,
        skipped = stats.skipped,
        "scan committed"
    );

    Ok(stats)
}

/// Apply the error policy to a per-path failure
fn note_error(policy: ErrorPolicy, err: WalkError, stats: &mut ScanStats) -> Result<()> {
    match policy {
        ErrorPolicy::Abort => Err(err.into()),
        ErrorPolicy::Skip => {
            warn!("{err}");
            stats.skipped += 1;
            Ok(())
        }
        ErrorPolicy::Collect => {
            stats.skipped += 1;
            stats.errors.push(err);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_stats_default() {
        let stats = ScanStats::default();
        assert_eq!(stats.files, 0);
        assert_eq!(stats.bytes, 0);
        assert!(stats.errors.is_empty());
    }

    #[test]
    fn test_files_per_second() {
        let stats = ScanStats {
            files: 1000,
            duration: Duration::from_secs(10),
            ..Default::default()
        };
        assert!((stats.files_per_second() - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_abort_policy_propagates() {
        let mut stats = ScanStats::default();
        let err = WalkError::PathAccess {
            path: "/x".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(note_error(ErrorPolicy::Abort, err, &mut stats).is_err());
        assert_eq!(stats.skipped, 0);
    }

    #[test]
    fn test_collect_policy_gathers() {
        let mut stats = ScanStats::default();
        for _ in 0..3 {
            let err = WalkError::PathAccess {
                path: "/x".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            };
            note_error(ErrorPolicy::Collect, err, &mut stats).unwrap();
        }
        assert_eq!(stats.skipped, 3);
        assert_eq!(stats.errors.len(), 3);
    }
}
